//! Text notation for boards.
//!
//! The compact form is nine row-major cells, e.g. `X.O.X...O`. Parsing
//! also accepts lowercase marks, `-`/`_` for empty cells and ignores
//! whitespace, `|` and `/`, so `"x o . / . x . / . . o"` and the grid
//! printed by `Display` both read back.

use crate::error::ParseBoardError;
use crate::types::{Board, Cell, Player};
use std::str::FromStr;
use tracing::{instrument, warn};

impl Board {
    /// Formats the board as its nine-character compact form.
    pub fn to_compact(&self) -> String {
        self.cells().map(|(_, cell)| cell.symbol()).collect()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.rows().iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
            let symbols: Vec<String> = row.iter().map(|cell| cell.symbol().to_string()).collect();
            write!(f, "{}", symbols.join("|"))?;
        }
        Ok(())
    }
}

/// A `-+-+-` rule between grid rows.
fn is_grid_rule(line: &str) -> bool {
    let line = line.trim();
    line.contains('+') && line.chars().all(|c| c == '-' || c == '+')
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '|' | '/' | '+')
}

fn parse_cell(c: char) -> Option<Cell> {
    match c {
        'X' | 'x' => Some(Cell::Marked(Player::X)),
        'O' | 'o' => Some(Cell::Marked(Player::O)),
        '.' | '-' | '_' => Some(Cell::Empty),
        _ => None,
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Rules only appear between rows of a multi-line grid. On a single
        // line, `-` is an empty cell and `+` a separator.
        let multi_line = s.lines().count() > 1;
        let body: String = s
            .lines()
            .filter(|line| !(multi_line && is_grid_rule(line)))
            .collect::<Vec<_>>()
            .join("\n");

        let symbols: Vec<char> = body.chars().filter(|&c| !is_separator(c)).collect();

        let mut cells = [[Cell::Empty; 3]; 3];
        for (position, &character) in symbols.iter().enumerate() {
            let Some(cell) = parse_cell(character) else {
                warn!(%character, position, "Unrecognised board character");
                return Err(ParseBoardError::InvalidCharacter {
                    character,
                    position,
                    input: s.to_string(),
                });
            };
            if position < 9 {
                cells[position / 3][position % 3] = cell;
            }
        }

        if symbols.len() != 9 {
            return Err(ParseBoardError::WrongCellCount {
                got: symbols.len(),
                input: s.to_string(),
            });
        }

        let board = Board::from_cells(cells);
        let x_count = board.count(Player::X);
        let o_count = board.count(Player::O);
        if x_count != o_count && x_count != o_count + 1 {
            warn!(x_count, o_count, "Board mark counts violate alternation");
            return Err(ParseBoardError::InvalidMarkCounts { x_count, o_count });
        }

        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Move;

    #[test]
    fn test_compact_round_trip() {
        let board: Board = "X.O.X...O".parse().unwrap();
        assert_eq!(board.get(Move::new(0, 0)), Some(Cell::Marked(Player::X)));
        assert_eq!(board.get(Move::new(0, 2)), Some(Cell::Marked(Player::O)));
        assert_eq!(board.get(Move::new(2, 2)), Some(Cell::Marked(Player::O)));
        assert_eq!(board.to_compact(), "X.O.X...O");
    }

    #[test]
    fn test_display_grid_parses_back() {
        let board: Board = "xo-/-x-/--o".parse().unwrap();
        let printed = board.to_string();
        assert_eq!(printed, "X|O|.\n-+-+-\n.|X|.\n-+-+-\n.|.|O");
        assert_eq!(printed.parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_empty_board() {
        let board: Board = ".........".parse().unwrap();
        assert_eq!(board, Board::new());
        assert_eq!("---------".parse::<Board>().unwrap(), Board::new());
        assert_eq!(Board::new().to_compact(), ".........");
    }

    #[test]
    fn test_single_line_dashes_are_cells() {
        assert_eq!("---+---+---".parse::<Board>().unwrap(), Board::new());
        assert_eq!("X--+-O-+---".parse::<Board>().unwrap().to_compact(), "X...O....");
        assert!(is_grid_rule(" -+-+- "));
        assert!(!is_grid_rule("---"));
    }

    #[test]
    fn test_wrong_cell_count() {
        assert!(matches!(
            "X.O".parse::<Board>(),
            Err(ParseBoardError::WrongCellCount { got: 3, .. })
        ));
        assert!(matches!(
            "..........".parse::<Board>(),
            Err(ParseBoardError::WrongCellCount { got: 10, .. })
        ));
    }

    #[test]
    fn test_invalid_character() {
        assert!(matches!(
            "X.O.Z...O".parse::<Board>(),
            Err(ParseBoardError::InvalidCharacter {
                character: 'Z',
                position: 4,
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_mark_counts() {
        assert_eq!(
            "OO.......".parse::<Board>(),
            Err(ParseBoardError::InvalidMarkCounts {
                x_count: 0,
                o_count: 2
            })
        );
        assert_eq!(
            "XX.......".parse::<Board>(),
            Err(ParseBoardError::InvalidMarkCounts {
                x_count: 2,
                o_count: 0
            })
        );
    }
}
