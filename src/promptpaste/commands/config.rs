use crate::commands::{CmdMessage, CmdResult};
use crate::config::PasteConfig;
use crate::error::Result;
use std::path::Path;

/// Reports the effective configuration, including the storage root that
/// was actually resolved for this invocation.
pub fn run(config: &PasteConfig, storage_root: &Path) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "storage = {}",
        storage_root.display()
    )));
    result.add_message(CmdMessage::info(format!(
        "preview-width = {}",
        config.preview_width
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_storage_and_width() {
        let config = PasteConfig::default();
        let res = run(&config, Path::new("/data/prompts")).unwrap();

        assert_eq!(res.messages[0].content, "storage = /data/prompts");
        assert_eq!(res.messages[1].content, "preview-width = 64");
    }
}
