use crate::core::BitBoard;

/******************************************\
|==========================================|
|              Board Renderer              |
|==========================================|
\******************************************/

/// # Board Renderer
///
/// The closed set of diagnostic text renderings for a [`BitBoard`]. Display
/// code picks a variant and dispatches through [`render`]; the set of
/// renderings is known at compile time so no open extension point is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoardRenderer {
    /// `height` lines of `1`/`0` characters, top rank first.
    #[default]
    Ascii,
    /// FEN-style piece placement: decimal runs for empty squares, `x` for set
    /// squares, ranks joined by `/`, top rank first.
    Fen,
}

/// Renders a board with the chosen renderer.
///
/// ## Examples
///
/// ```
/// use tabula::core::{BitBoard, BoardSize};
/// use tabula::utils::{BoardRenderer, render};
///
/// let mut board = BitBoard::new(BoardSize::new(3, 2).unwrap());
/// board.set_at(0, 0);
/// assert_eq!(render(BoardRenderer::Ascii, &board), "000\n100\n");
/// assert_eq!(render(BoardRenderer::Fen, &board), "3/x2");
/// ```
pub fn render(renderer: BoardRenderer, board: &BitBoard) -> String {
    match renderer {
        BoardRenderer::Ascii => render_ascii(board),
        BoardRenderer::Fen => render_fen(board),
    }
}

fn render_ascii(board: &BitBoard) -> String {
    let size = board.size();
    let mut out = String::with_capacity((size.width() + 1) * size.height());

    for rank in (0..size.height()).rev() {
        for file in 0..size.width() {
            out.push(if board.is_set_at(file, rank) { '1' } else { '0' });
        }
        out.push('\n');
    }
    out
}

fn render_fen(board: &BitBoard) -> String {
    let size = board.size();
    let mut out = String::new();

    for rank in (0..size.height()).rev() {
        let mut empty_run = 0;
        for file in 0..size.width() {
            if board.is_set_at(file, rank) {
                if empty_run > 0 {
                    out.push_str(&empty_run.to_string());
                    empty_run = 0;
                }
                out.push('x');
            } else {
                empty_run += 1;
            }
        }
        if empty_run > 0 {
            out.push_str(&empty_run.to_string());
        }
        if rank > 0 {
            out.push('/');
        }
    }
    out
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
