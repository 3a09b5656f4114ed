use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;

pub fn run(records: &mut RecordStore, name: &str) -> Result<CmdResult> {
    let removed = records.remove_contact(name)?;
    Ok(CmdResult::modified()
        .with_contacts(vec![removed])
        .with_message(CmdMessage::success(format!("Contact deleted: {}", name))))
}
