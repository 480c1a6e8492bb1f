/// User interface pieces
///
/// - `table` - the list of ingested records
/// - `modal` - the preview dialog drawn over the table
/// - `notify` - native message dialogs

pub mod modal;
pub mod notify;
pub mod table;
