use super::position::Position;
use crate::clamp_players;
use std::collections::HashMap;

/// canonical action order for each supported table size. the hero's
/// index in this list anchors the seat rotation.
pub fn canonical_order(players: usize) -> &'static [Position] {
    use Position::*;
    match clamp_players(players) {
        2 => &[Sb, Bb],
        3 => &[Btn, Sb, Bb],
        4 => &[Co, Btn, Sb, Bb],
        5 => &[Hj, Co, Btn, Sb, Bb],
        6 => &[Lj, Hj, Co, Btn, Sb, Bb],
        7 => &[Utg, Lj, Hj, Co, Btn, Sb, Bb],
        8 => &[Utg, Utg1, Lj, Hj, Co, Btn, Sb, Bb],
        9 => &[Utg, Utg1, Mp, Lj, Hj, Co, Btn, Sb, Bb],
        _ => unreachable!("player count is clamped"),
    }
}

/// a position's index in the full 9-max acting order, used to decide
/// which canonical position an off-table hero displaces
fn acting_rank(position: Position) -> usize {
    canonical_order(crate::MAX_PLAYERS)
        .iter()
        .position(|p| *p == position)
        .unwrap_or(0)
}

/// bijection from position code to rendering seat, hero always at 0.
///
/// derived per render from the hero's position and the table size,
/// never persisted beyond one render. a position at canonical index i
/// with the hero at index h lands at seat (i - h) mod n, so everyone
/// keeps their relative acting order clockwise from the hero.
#[derive(Debug, Clone)]
pub struct SeatMap(HashMap<Position, usize>);

impl SeatMap {
    pub fn new(players: usize, hero: Option<Position>) -> Self {
        let order = canonical_order(players);
        let n = order.len();
        match hero.map(|h| (h, order.iter().position(|p| *p == h))) {
            Some((_, Some(h))) => {
                Self(order.iter().enumerate().map(|(i, p)| (*p, (n + i - h) % n)).collect())
            }
            // hero code missing from the canonical table: hero takes
            // seat 0 and displaces the canonical position nearest its
            // own acting order. the blinds always act last, so they
            // keep their seats and their chip geometry.
            Some((hero, None)) => {
                let displaced = order
                    .iter()
                    .copied()
                    .min_by_key(|p| acting_rank(*p).abs_diff(acting_rank(hero)));
                let mut seats: HashMap<Position, usize> = HashMap::new();
                seats.insert(hero, 0);
                let mut seat = 1;
                for p in order.iter().copied() {
                    if Some(p) == displaced {
                        continue;
                    }
                    seats.insert(p, seat);
                    seat += 1;
                }
                log::warn!("{:<32}{:<32}", "hero position off-table", hero);
                Self(seats)
            }
            // no hero at all: canonical order as-is
            None => Self(order.iter().enumerate().map(|(i, p)| (*p, i)).collect()),
        }
    }

    pub fn seat_of(&self, position: Position) -> Option<usize> {
        self.0.get(&position).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_lengths() {
        for n in crate::MIN_PLAYERS..=crate::MAX_PLAYERS {
            assert!(canonical_order(n).len() == n);
        }
    }

    #[test]
    fn bijective_for_all_heroes() {
        for n in crate::MIN_PLAYERS..=crate::MAX_PLAYERS {
            for hero in canonical_order(n) {
                let map = SeatMap::new(n, Some(*hero));
                let mut seats = canonical_order(n)
                    .iter()
                    .map(|p| map.seat_of(*p).unwrap())
                    .collect::<Vec<usize>>();
                seats.sort();
                assert!(seats == (0..n).collect::<Vec<usize>>());
                assert!(map.seat_of(*hero) == Some(0));
            }
        }
    }

    #[test]
    fn relative_order_preserved() {
        // 9-max, hero in CO: BTN acts right after hero so it sits at 1
        let map = SeatMap::new(9, Some(Position::Co));
        assert!(map.seat_of(Position::Co) == Some(0));
        assert!(map.seat_of(Position::Btn) == Some(1));
        assert!(map.seat_of(Position::Sb) == Some(2));
        assert!(map.seat_of(Position::Bb) == Some(3));
        assert!(map.seat_of(Position::Utg) == Some(4));
        assert!(map.seat_of(Position::Hj) == Some(8));
    }

    #[test]
    fn fallback_without_hero_is_bijective() {
        let map = SeatMap::new(6, None);
        let mut seats = canonical_order(6)
            .iter()
            .map(|p| map.seat_of(*p).unwrap())
            .collect::<Vec<usize>>();
        seats.sort();
        assert!(seats == (0..6).collect::<Vec<usize>>());
    }

    #[test]
    fn fallback_with_off_table_hero() {
        // UTG does not exist at a 4-handed table; hero still gets seat
        // 0 and displaces CO, its nearest neighbor in acting order
        let map = SeatMap::new(4, Some(Position::Utg));
        assert!(map.seat_of(Position::Utg) == Some(0));
        assert!(map.seat_of(Position::Co).is_none());
        let mut seats = [Position::Utg, Position::Btn, Position::Sb, Position::Bb]
            .iter()
            .map(|p| map.seat_of(*p).unwrap())
            .collect::<Vec<usize>>();
        seats.sort();
        assert!(seats == vec![0, 1, 2, 3]);
    }

    #[test]
    fn fallback_never_unseats_big_blind() {
        // SB outranks BB in acting-order distance from any off-table
        // hero, so BB is never the displaced position
        for n in crate::MIN_PLAYERS..crate::MAX_PLAYERS {
            let off = canonical_order(crate::MAX_PLAYERS)
                .iter()
                .copied()
                .find(|p| !canonical_order(n).contains(p))
                .unwrap();
            let map = SeatMap::new(n, Some(off));
            assert!(map.seat_of(off) == Some(0));
            assert!(map.seat_of(Position::Bb).is_some());
            assert!(map.len() == n);
        }
    }
}
