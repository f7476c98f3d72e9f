//! Move generation.
//!
//! Generates pseudo-legal moves for knights, kings and pawns. Moves may
//! leave the mover's own king in check; a caller that needs fully legal
//! moves has to filter them afterwards. Bishops, rooks and queens block and
//! can be captured but never move. Castling, en passant and promotion are
//! not generated.

mod attacks;

use crate::{Bitboard, PieceBoards};
use movegen_core::{Board, Color, Move, PieceKind, Square};

pub use attacks::{AttackTables, KING_OFFSETS, KNIGHT_OFFSETS};

/// Moves produced by one generation pass.
///
/// Order is knights, then the king, then pawns (single pushes, double
/// pushes, captures toward the a-file, captures toward the h-file). Inside
/// each group moves come in ascending square order.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Creates an empty move list.
    #[inline]
    pub const fn new() -> Self {
        MoveList { moves: Vec::new() }
    }

    /// Adds a move to the list.
    #[inline]
    pub fn push(&mut self, m: Move) {
        self.moves.push(m);
    }

    /// Returns the number of moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns true if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Clears the move list.
    #[inline]
    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// Returns true if some move starts on `from`.
    pub fn can_move_from(&self, from: Square) -> bool {
        self.moves.iter().any(|m| m.from() == from)
    }

    /// Returns true if the exact move `from` to `to` is in the list.
    pub fn can_move(&self, from: Square, to: Square) -> bool {
        self.moves.iter().any(|m| m.from() == from && m.to() == to)
    }

    /// Returns every destination reachable from `from`.
    pub fn targets_from(&self, from: Square) -> Bitboard {
        self.moves
            .iter()
            .filter(|m| m.from() == from)
            .map(|m| m.to())
            .collect()
    }

    /// Returns the number of moves made by the given piece kind.
    pub fn count_of(&self, kind: PieceKind) -> usize {
        self.moves.iter().filter(|m| m.kind() == kind).count()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// The four pawn move classes. Each moves every pawn by the same index
/// shift, so origins are recovered by subtracting it from the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PawnMove {
    /// One rank forward onto an empty square.
    Push,
    /// Two ranks forward from the starting rank through two empty squares.
    DoublePush,
    /// Diagonal capture toward the a-file.
    CaptureLeft,
    /// Diagonal capture toward the h-file.
    CaptureRight,
}

impl PawnMove {
    /// All classes in generation order.
    pub const ALL: [PawnMove; 4] = [
        PawnMove::Push,
        PawnMove::DoublePush,
        PawnMove::CaptureLeft,
        PawnMove::CaptureRight,
    ];

    /// Returns the destination minus origin square index for this class.
    pub const fn shift(self, color: Color) -> i8 {
        match (self, color) {
            (PawnMove::Push, Color::White) => 8,
            (PawnMove::Push, Color::Black) => -8,
            (PawnMove::DoublePush, Color::White) => 16,
            (PawnMove::DoublePush, Color::Black) => -16,
            (PawnMove::CaptureLeft, Color::White) => 7,
            (PawnMove::CaptureLeft, Color::Black) => -9,
            (PawnMove::CaptureRight, Color::White) => 9,
            (PawnMove::CaptureRight, Color::Black) => -7,
        }
    }
}

/// Returns the destinations of every `side` pawn for one move class.
pub fn pawn_targets(view: &PieceBoards, side: Color, class: PawnMove) -> Bitboard {
    let pawns = view.pieces_of(PieceKind::Pawn, side);
    let empty = view.empty_squares();
    let enemy = view.occupancy(side.opposite());
    let push = PawnMove::Push.shift(side);

    match class {
        PawnMove::Push => pawns.shift(push) & empty,
        PawnMove::DoublePush => {
            let third_rank = match side {
                Color::White => Bitboard::RANK_3,
                Color::Black => Bitboard::RANK_6,
            };
            let single = pawns.shift(push) & empty;
            (single & third_rank).shift(push) & empty
        }
        // Masking the origin file first keeps the diagonal from wrapping
        // onto the opposite edge of the board.
        PawnMove::CaptureLeft => (pawns & !Bitboard::FILE_A).shift(class.shift(side)) & enemy,
        PawnMove::CaptureRight => (pawns & !Bitboard::FILE_H).shift(class.shift(side)) & enemy,
    }
}

/// Generates all pseudo-legal knight, king and pawn moves for `side`.
pub fn generate_moves(tables: &AttackTables, board: &Board, side: Color) -> MoveList {
    generate_from_view(tables, &PieceBoards::from_board(board), side)
}

/// Generates moves from an already built bitboard view.
pub fn generate_from_view(tables: &AttackTables, view: &PieceBoards, side: Color) -> MoveList {
    let mut moves = MoveList::new();

    generate_knight_moves(tables, view, side, &mut moves);
    let knights = moves.len();
    generate_king_moves(tables, view, side, &mut moves);
    let kings = moves.len() - knights;
    generate_pawn_moves(view, side, &mut moves);
    let pawns = moves.len() - knights - kings;

    tracing::trace!(%side, knights, kings, pawns, "generated moves");
    moves
}

fn generate_knight_moves(
    tables: &AttackTables,
    view: &PieceBoards,
    side: Color,
    moves: &mut MoveList,
) {
    let own = view.occupancy(side);
    for from in view.pieces_of(PieceKind::Knight, side) {
        for to in tables.knight(from) & !own {
            moves.push(Move::new(from, to, PieceKind::Knight));
        }
    }
}

fn generate_king_moves(
    tables: &AttackTables,
    view: &PieceBoards,
    side: Color,
    moves: &mut MoveList,
) {
    let Some(from) = view.king_square(side) else {
        return;
    };
    let own = view.occupancy(side);
    for to in tables.king(from) & !own {
        moves.push(Move::new(from, to, PieceKind::King));
    }
}

fn generate_pawn_moves(view: &PieceBoards, side: Color, moves: &mut MoveList) {
    for class in PawnMove::ALL {
        let shift = class.shift(side);
        for to in pawn_targets(view, side, class) {
            let from = Square::from_bit((to.index() as i8 - shift) as u32);
            moves.push(Move::new(from, to, PieceKind::Pawn));
        }
    }
}

/// Owns the attack tables for a session and generates moves against them.
#[derive(Debug, Clone, Default)]
pub struct MoveGenerator {
    tables: AttackTables,
}

impl MoveGenerator {
    /// Computes the attack tables.
    pub fn new() -> Self {
        Self::with_tables(AttackTables::new())
    }

    /// Uses tables computed elsewhere.
    pub fn with_tables(tables: AttackTables) -> Self {
        MoveGenerator { tables }
    }

    /// Returns the attack tables.
    pub fn tables(&self) -> &AttackTables {
        &self.tables
    }

    /// Generates all pseudo-legal moves for `side` on `board`.
    pub fn generate(&self, board: &Board, side: Color) -> MoveList {
        generate_moves(&self.tables, board, side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use movegen_core::Piece;
    use proptest::prelude::*;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn moves_for(fen: &str, side: Color) -> MoveList {
        let board = Board::from_fen(fen).unwrap();
        MoveGenerator::new().generate(&board, side)
    }

    #[test]
    fn movelist_push_and_iterate() {
        let mut list = MoveList::new();
        assert!(list.is_empty());

        let m1 = Move::new(sq("e2"), sq("e4"), PieceKind::Pawn);
        let m2 = Move::new(sq("g1"), sq("f3"), PieceKind::Knight);

        list.push(m1);
        list.push(m2);

        assert_eq!(list.len(), 2);
        assert_eq!(list[0], m1);
        assert_eq!(list[1], m2);
        assert_eq!(list.count_of(PieceKind::Knight), 1);

        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn movelist_queries() {
        let mut list = MoveList::new();
        list.push(Move::new(sq("e2"), sq("e3"), PieceKind::Pawn));
        list.push(Move::new(sq("e2"), sq("e4"), PieceKind::Pawn));

        assert!(list.can_move_from(sq("e2")));
        assert!(!list.can_move_from(sq("d2")));
        assert!(list.can_move(sq("e2"), sq("e4")));
        assert!(!list.can_move(sq("e2"), sq("e5")));
        assert_eq!(list.targets_from(sq("e2")).count(), 2);
        assert!(list.targets_from(sq("d2")).is_empty());
    }

    #[test]
    fn pawn_shift_amounts() {
        assert_eq!(PawnMove::Push.shift(Color::White), 8);
        assert_eq!(PawnMove::DoublePush.shift(Color::Black), -16);
        assert_eq!(PawnMove::CaptureLeft.shift(Color::White), 7);
        assert_eq!(PawnMove::CaptureLeft.shift(Color::Black), -9);
        assert_eq!(PawnMove::CaptureRight.shift(Color::White), 9);
        assert_eq!(PawnMove::CaptureRight.shift(Color::Black), -7);
    }

    #[test]
    fn startpos_white() {
        let moves = MoveGenerator::new().generate(&Board::startpos(), Color::White);
        assert_eq!(moves.len(), 20);
        assert_eq!(moves.count_of(PieceKind::Knight), 4);
        assert_eq!(moves.count_of(PieceKind::King), 0);
        assert_eq!(moves.count_of(PieceKind::Pawn), 16);
        assert!(moves.can_move(sq("g1"), sq("f3")));
        assert!(moves.can_move(sq("b1"), sq("a3")));
        assert!(moves.can_move(sq("e2"), sq("e4")));
        assert!(moves.can_move(sq("a2"), sq("a3")));
    }

    #[test]
    fn startpos_black() {
        let moves = MoveGenerator::new().generate(&Board::startpos(), Color::Black);
        assert_eq!(moves.len(), 20);
        assert_eq!(moves.count_of(PieceKind::Knight), 4);
        assert!(moves.can_move(sq("e7"), sq("e5")));
        assert!(moves.can_move(sq("g8"), sq("h6")));
    }

    #[test]
    fn category_order() {
        let moves = MoveGenerator::new().generate(&Board::startpos(), Color::White);
        let kinds: Vec<PieceKind> = moves.as_slice().iter().map(|m| m.kind()).collect();
        assert!(kinds[..4].iter().all(|&k| k == PieceKind::Knight));
        assert!(kinds[4..].iter().all(|&k| k == PieceKind::Pawn));
        // b1 knight first, ascending destinations
        assert_eq!(moves[0], Move::new(Square::B1, sq("a3"), PieceKind::Knight));
        assert_eq!(moves[1], Move::new(Square::B1, sq("c3"), PieceKind::Knight));
        // single pushes before double pushes
        assert_eq!(moves[4], Move::new(sq("a2"), sq("a3"), PieceKind::Pawn));
        assert_eq!(moves[12], Move::new(sq("a2"), sq("a4"), PieceKind::Pawn));
    }

    #[test]
    fn knight_captures_enemy_not_own() {
        // knight on d4, own pawn on e6, enemy pawn on c6
        let moves = moves_for("8/8/2p1P3/8/3N4/8/8/8", Color::White);
        let knight = moves.targets_from(sq("d4"));
        assert!(knight.contains(sq("c6")));
        assert!(!knight.contains(sq("e6")));
        assert_eq!(knight.count(), 7);
    }

    #[test]
    fn king_moves_in_open_board() {
        let moves = moves_for("8/8/8/8/3K4/8/8/8", Color::White);
        assert_eq!(moves.count_of(PieceKind::King), 8);
    }

    #[test]
    fn king_on_a1_generates_moves() {
        let moves = moves_for("8/8/8/8/8/8/8/K7", Color::White);
        assert_eq!(moves.len(), 3);
        assert!(moves.can_move_from(Square::A1));
    }

    #[test]
    fn kingless_side_still_moves() {
        let moves = moves_for("4k3/8/8/8/8/8/4P3/6N1", Color::White);
        assert_eq!(moves.count_of(PieceKind::King), 0);
        assert_eq!(moves.count_of(PieceKind::Pawn), 2);
        assert_eq!(moves.count_of(PieceKind::Knight), 2);
    }

    #[test]
    fn empty_side_yields_nothing() {
        let moves = moves_for("4k3/8/8/8/8/8/8/8", Color::White);
        assert!(moves.is_empty());
    }

    #[test]
    fn sliders_do_not_move() {
        let moves = moves_for("8/8/8/8/3Q4/8/1B6/R7", Color::White);
        assert!(moves.is_empty());
    }

    #[test]
    fn sliders_block_and_can_be_captured() {
        // white pawn on e4 blocked by black rook on e5, can capture bishop on d5
        let moves = moves_for("8/8/8/3br3/4P3/8/8/8", Color::White);
        assert!(!moves.can_move(sq("e4"), sq("e5")));
        assert!(moves.can_move(sq("e4"), sq("d5")));
        assert_eq!(moves.len(), 1);
    }

    #[test]
    fn pawn_captures_both_diagonals() {
        let moves = moves_for("8/8/8/3p1p2/4P3/8/8/8", Color::White);
        assert!(moves.can_move(sq("e4"), sq("d5")));
        assert!(moves.can_move(sq("e4"), sq("f5")));
        assert!(moves.can_move(sq("e4"), sq("e5")));
        assert_eq!(moves.len(), 3);

        let moves = moves_for("8/8/8/3p4/2P1P3/8/8/8", Color::Black);
        assert!(moves.can_move(sq("d5"), sq("c4")));
        assert!(moves.can_move(sq("d5"), sq("e4")));
        assert!(moves.can_move(sq("d5"), sq("d4")));
    }

    #[test]
    fn pawn_does_not_capture_empty_diagonal() {
        let moves = moves_for("8/8/8/8/4P3/8/8/8", Color::White);
        assert_eq!(moves.len(), 1);
        assert!(moves.can_move(sq("e4"), sq("e5")));
    }

    #[test]
    fn pawn_does_not_capture_forward() {
        let moves = moves_for("8/8/8/4p3/4P3/8/8/8", Color::White);
        assert!(moves.is_empty());
    }

    #[test]
    fn a_file_pawn_does_not_wrap() {
        // white pawn on a4; black piece on h4 sits at index a4 + 7
        let moves = moves_for("8/8/8/8/P6p/8/8/8", Color::White);
        assert_eq!(moves.len(), 1);
        assert!(moves.can_move(sq("a4"), sq("a5")));

        // black pawn on a5; white piece on h3 sits at index a5 - 9
        let moves = moves_for("8/8/8/p7/8/7P/8/8", Color::Black);
        assert_eq!(moves.len(), 1);
        assert!(moves.can_move(sq("a5"), sq("a4")));
    }

    #[test]
    fn h_file_pawn_does_not_wrap() {
        // white pawn on h4; black piece on a6 sits at index h4 + 9
        let moves = moves_for("8/8/p7/8/7P/8/8/8", Color::White);
        assert_eq!(moves.len(), 1);
        assert!(moves.can_move(sq("h4"), sq("h5")));

        // black pawn on h5; white piece on a5 sits at index h5 - 7
        let moves = moves_for("8/8/8/P6p/8/8/8/8", Color::Black);
        assert_eq!(moves.len(), 1);
        assert!(moves.can_move(sq("h5"), sq("h4")));
    }

    #[test]
    fn double_push_only_from_start_rank() {
        let moves = moves_for("8/8/8/8/8/4P3/8/8", Color::White);
        assert_eq!(moves.len(), 1);
        assert!(!moves.can_move(sq("e3"), sq("e5")));

        let moves = moves_for("8/8/4p3/8/8/8/8/8", Color::Black);
        assert_eq!(moves.len(), 1);
        assert!(!moves.can_move(sq("e6"), sq("e4")));
    }

    #[test]
    fn double_push_blocked() {
        // blocked on the first square
        let moves = moves_for("8/8/8/8/8/4n3/4P3/8", Color::White);
        assert!(moves.is_empty());

        // blocked on the second square
        let moves = moves_for("8/8/8/8/4n3/8/4P3/8", Color::White);
        assert_eq!(moves.len(), 1);
        assert!(moves.can_move(sq("e2"), sq("e3")));
    }

    #[test]
    fn pawn_on_last_rank_has_no_push() {
        let moves = moves_for("4P3/8/8/8/8/8/8/8", Color::White);
        assert!(moves.is_empty());
    }

    #[test]
    fn pawn_targets_per_class() {
        let board = Board::from_fen("8/8/8/8/8/2p5/PP6/8").unwrap();
        let view = PieceBoards::from_board(&board);
        let push = pawn_targets(&view, Color::White, PawnMove::Push);
        assert_eq!(push, Bitboard::from(sq("a3")) | Bitboard::from(sq("b3")));
        let double = pawn_targets(&view, Color::White, PawnMove::DoublePush);
        assert_eq!(double, Bitboard::from(sq("a4")) | Bitboard::from(sq("b4")));
        let right = pawn_targets(&view, Color::White, PawnMove::CaptureRight);
        assert_eq!(right, Bitboard::from(sq("c3")));
        assert!(pawn_targets(&view, Color::White, PawnMove::CaptureLeft).is_empty());
    }

    #[test]
    fn generation_leaves_board_untouched() {
        let board = Board::startpos();
        let before = board.clone();
        let _ = MoveGenerator::new().generate(&board, Color::White);
        assert_eq!(board, before);
    }

    fn arb_board() -> impl Strategy<Value = Board> {
        let cell = prop_oneof![
            3 => Just(None),
            1 => (0usize..6, any::<bool>()).prop_map(|(k, white)| {
                let color = if white { Color::White } else { Color::Black };
                Some(Piece::new(PieceKind::ALL[k], color))
            }),
        ];
        prop::collection::vec(cell, 64).prop_map(|cells| {
            let mut board = Board::empty();
            for (sq, piece) in Square::all().zip(cells) {
                board.set(sq, piece);
            }
            board
        })
    }

    fn arb_side() -> impl Strategy<Value = Color> {
        prop_oneof![Just(Color::White), Just(Color::Black)]
    }

    proptest! {
        #[test]
        fn never_captures_own_piece(board in arb_board(), side in arb_side()) {
            let moves = MoveGenerator::new().generate(&board, side);
            for m in &moves {
                let mover = board.get(m.from());
                prop_assert_eq!(mover.map(|p| (p.kind, p.color)), Some((m.kind(), side)));
                prop_assert_ne!(board.get(m.to()).map(|p| p.color), Some(side));
            }
        }

        #[test]
        fn pawn_diagonals_need_enemy(board in arb_board(), side in arb_side()) {
            let moves = MoveGenerator::new().generate(&board, side);
            for m in moves.as_slice().iter().filter(|m| m.kind() == PieceKind::Pawn) {
                let df = (m.to().file_index() as i8 - m.from().file_index() as i8).abs();
                let dr = m.to().rank_index() as i8 - m.from().rank_index() as i8;
                prop_assert!(df <= 1);
                prop_assert_eq!(dr.signum(), side.forward());
                if df == 1 {
                    prop_assert_eq!(board.get(m.to()).map(|p| p.color), Some(side.opposite()));
                } else {
                    prop_assert!(board.get(m.to()).is_none());
                }
            }
        }

        #[test]
        fn leaper_moves_stay_in_tables(board in arb_board(), side in arb_side()) {
            let generator = MoveGenerator::new();
            let moves = generator.generate(&board, side);
            for m in &moves {
                match m.kind() {
                    PieceKind::Knight => {
                        prop_assert!(generator.tables().knight(m.from()).contains(m.to()));
                    }
                    PieceKind::King => {
                        prop_assert!(generator.tables().king(m.from()).contains(m.to()));
                    }
                    _ => {}
                }
            }
        }
    }
}
