use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::resolve_id;
use crate::store::DataStore;

/// Removes the entry `id` resolves to. Nothing happens, and nothing is
/// reported, when no entry matches.
pub fn run<S: DataStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let names = store.entry_names()?;
    let mut result = CmdResult::default();

    if let Some(name) = resolve_id(id, &names) {
        if store.remove_entry(&name)? {
            result.add_message(CmdMessage::success(format!("Removed entry {}", id)));
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn removes_matching_entry() {
        let mut store = StoreFixture::new().with_entries(&["bye.md", "stay.md"]).store;
        let res = run(&mut store, "bye").unwrap();

        assert!(!store.exists("bye.md"));
        assert!(store.exists("stay.md"));
        assert_eq!(res.messages.len(), 1);
        assert_eq!(res.messages[0].content, "Removed entry bye");
    }

    #[test]
    fn missing_id_is_a_silent_no_op() {
        let mut store = StoreFixture::new().with_entries(&["stay.md"]).store;
        let res = run(&mut store, "bye").unwrap();

        assert!(res.messages.is_empty());
        assert_eq!(store.len(), 1);
    }
}
