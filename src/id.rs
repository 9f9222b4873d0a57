use std::sync::atomic::{AtomicU64, Ordering};

use gpui::SharedString;

/// Derives a component id from the caller's source location.
///
/// Declarative components are rebuilt every frame, so the id must not change
/// between frames for the same call site.
#[track_caller]
pub fn auto_id(prefix: &str) -> SharedString {
    let location = std::panic::Location::caller();
    let seed = format!(
        "{prefix}:{}:{}:{}",
        location.file(),
        location.line(),
        location.column()
    );
    format!("{prefix}-{:016x}", fnv1a64(seed.as_bytes())).into()
}

/// Id unique for the lifetime of the process, for long-lived views.
pub fn unique_id(prefix: &str) -> SharedString {
    static NEXT: AtomicU64 = AtomicU64::new(1);
    format!("{prefix}-{}", NEXT.fetch_add(1, Ordering::Relaxed)).into()
}

/// Id of the `index`-th item rendered by a group.
pub fn item_id(group_id: &str, index: usize) -> SharedString {
    format!("{group_id}::item-{index}").into()
}

fn fnv1a64(bytes: &[u8]) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x00000100000001b3;

    bytes.iter().fold(OFFSET_BASIS, |hash, byte| {
        (hash ^ u64::from(*byte)).wrapping_mul(PRIME)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[track_caller]
    fn checkbox_id() -> SharedString {
        auto_id("checkbox")
    }

    #[test]
    fn same_call_site_yields_same_id() {
        let ids = (0..3).map(|_| checkbox_id()).collect::<Vec<_>>();
        assert!(ids.windows(2).all(|pair| pair[0] == pair[1]));
        assert!(ids[0].starts_with("checkbox-"));
    }

    #[test]
    fn other_call_site_yields_other_id() {
        let first = checkbox_id();
        let second = auto_id("checkbox");
        assert_ne!(first, second);
    }

    #[test]
    fn item_ids_are_scoped_to_group() {
        assert_eq!(item_id("plans", 2).as_ref(), "plans::item-2");
        assert_ne!(item_id("plans", 0), item_id("extras", 0));
    }

    #[test]
    fn unique_ids_never_repeat() {
        let first = unique_id("toggle-view");
        let second = unique_id("toggle-view");
        assert_ne!(first, second);
        assert!(first.starts_with("toggle-view-"));
    }
}
