use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::resolve_id;
use crate::store::DataStore;

/// Looks up an entry by id. A miss is not an error: the result simply
/// carries no content.
pub fn run<S: DataStore>(store: &S, id: &str) -> Result<CmdResult> {
    let names = store.entry_names()?;
    let Some(name) = resolve_id(id, &names) else {
        return Ok(CmdResult::default());
    };

    Ok(match store.read_entry(&name)? {
        Some(content) => CmdResult::default().with_content(content),
        None => CmdResult::default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn reads_by_id() {
        let store = StoreFixture::new()
            .with_entry("do_tests.md", "run them all")
            .store;
        let res = run(&store, "do_tests").unwrap();
        assert_eq!(res.content, Some(b"run them all".to_vec()));
    }

    #[test]
    fn reads_by_full_name() {
        let store = StoreFixture::new().with_entry("do_tests.md", "x").store;
        let res = run(&store, "do_tests.md").unwrap();
        assert_eq!(res.content, Some(b"x".to_vec()));
    }

    #[test]
    fn miss_is_silent() {
        let store = StoreFixture::new().with_entry("do_tests.md", "x").store;
        let res = run(&store, "do_test").unwrap();
        assert!(res.content.is_none());
        assert!(res.messages.is_empty());
    }
}
