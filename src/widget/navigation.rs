//! Where keyboard focus moves inside the result list.
//!
//! Positions only count navigable items (those with an activation target).
//! Movement clamps at either end and never wraps around.

use crate::core::ItemId;
use crate::surface::ResultItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Item that should receive focus after moving `count` steps from `focused`.
///
/// With nothing focused (or a focused item that is gone) the first item in
/// `direction` is the anchor and counts as the first step. Returns `None` when
/// there is nowhere to go, including when the clamp lands on `focused` itself.
pub fn target<'a>(
    items: &'a [ResultItem],
    focused: Option<&ItemId>,
    direction: Direction,
    count: usize,
) -> Option<&'a ResultItem> {
    let navigable = items
        .iter()
        .filter(|item| item.is_navigable())
        .collect::<Vec<_>>();
    let last = navigable.len().checked_sub(1)?;
    let count = count.max(1);

    let current = focused.and_then(|id| navigable.iter().position(|item| item.id == *id));
    let index = match (current, direction) {
        (Some(at), Direction::Forward) => at.saturating_add(count).min(last),
        (Some(at), Direction::Backward) => at.saturating_sub(count),
        (None, Direction::Forward) => (count - 1).min(last),
        (None, Direction::Backward) => last.saturating_sub(count - 1),
    };

    if current == Some(index) {
        return None;
    }
    navigable.get(index).copied()
}

/// How many items fit in the visible list. `None` when either measurement is
/// missing or degenerate.
pub fn page_size(list_height: Option<f32>, item_height: Option<f32>) -> Option<usize> {
    let list_height = list_height?;
    let item_height = item_height?;
    if !list_height.is_finite() || !item_height.is_finite() || item_height <= 0.0 {
        return None;
    }
    let size = (list_height / item_height).floor();
    if size < 1.0 {
        return Some(1);
    }
    Some(size as usize)
}

#[cfg(test)]
mod tests {
    use super::{Direction, page_size, target};
    use crate::core::ItemId;
    use crate::surface::ResultItem;

    fn items(n: usize) -> Vec<ResultItem> {
        (1..=n)
            .map(|i| ResultItem {
                id: ItemId::new(format!("i{i}")),
                href: Some(format!("/toggle/{i}")),
                focused: false,
            })
            .collect()
    }

    fn id(n: usize) -> ItemId {
        ItemId::new(format!("i{n}"))
    }

    fn land(
        items: &[ResultItem],
        focused: Option<usize>,
        direction: Direction,
        count: usize,
    ) -> Option<String> {
        let focused = focused.map(id);
        target(items, focused.as_ref(), direction, count).map(|item| item.id.to_string())
    }

    #[test]
    fn arrow_moves_one_step() {
        let list = items(5);
        assert_eq!(land(&list, Some(2), Direction::Forward, 1).as_deref(), Some("i3"));
        assert_eq!(land(&list, Some(2), Direction::Backward, 1).as_deref(), Some("i1"));
    }

    #[test]
    fn no_focus_anchors_at_the_ends() {
        let list = items(5);
        assert_eq!(land(&list, None, Direction::Forward, 1).as_deref(), Some("i1"));
        assert_eq!(land(&list, None, Direction::Backward, 1).as_deref(), Some("i5"));
        assert_eq!(land(&list, None, Direction::Forward, 3).as_deref(), Some("i3"));
        assert_eq!(land(&list, None, Direction::Backward, 3).as_deref(), Some("i3"));
    }

    #[test]
    fn falling_off_either_end_does_not_move() {
        let list = items(3);
        assert_eq!(land(&list, Some(3), Direction::Forward, 1), None);
        assert_eq!(land(&list, Some(1), Direction::Backward, 1), None);
    }

    #[test]
    fn page_moves_clamp_to_the_ends() {
        let n = 10;
        let list = items(n);
        for k in 1..=n {
            for page in 1..=12 {
                let down = (k + page).min(n);
                let up = k.saturating_sub(page).max(1);
                let expected_down = (down != k).then(|| format!("i{down}"));
                let expected_up = (up != k).then(|| format!("i{up}"));
                assert_eq!(land(&list, Some(k), Direction::Forward, page), expected_down);
                assert_eq!(land(&list, Some(k), Direction::Backward, page), expected_up);
            }
        }
    }

    #[test]
    fn non_navigable_rows_are_skipped() {
        let mut list = items(4);
        list[1].href = None;
        list[2].href = Some(String::new());
        assert_eq!(land(&list, Some(1), Direction::Forward, 1).as_deref(), Some("i4"));
        assert_eq!(land(&list, Some(4), Direction::Backward, 1).as_deref(), Some("i1"));
    }

    #[test]
    fn vanished_focus_behaves_like_no_focus() {
        let list = items(3);
        assert_eq!(land(&list, Some(9), Direction::Forward, 1).as_deref(), Some("i1"));
    }

    #[test]
    fn empty_list_has_no_target() {
        assert_eq!(land(&[], None, Direction::Forward, 1), None);
        let mut notes = items(2);
        for item in &mut notes {
            item.href = None;
        }
        assert_eq!(land(&notes, None, Direction::Backward, 1), None);
    }

    #[test]
    fn page_size_floors_and_guards() {
        assert_eq!(page_size(Some(100.0), Some(30.0)), Some(3));
        assert_eq!(page_size(Some(10.0), Some(30.0)), Some(1));
        assert_eq!(page_size(Some(100.0), Some(0.0)), None);
        assert_eq!(page_size(None, Some(30.0)), None);
    }
}
