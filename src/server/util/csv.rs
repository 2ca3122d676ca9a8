//! CSV rendering for complaint exports.

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::server::{error::AppError, model::complaint::Complaint};

pub const COMPLAINT_CSV_HEADER: &str =
    "Complaint ID,Order ID,Issue Type,Status,Description,Created Date,Updated Date";

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders complaints as CSV with a header row.
///
/// The header is written as-is. Every data field is quoted, with embedded quotes doubled.
///
/// # Returns
/// - `Ok(String)` - CSV document, one `\n`-terminated line per row
/// - `Err(AppError::CsvErr)` - A row could not be written
/// - `Err(AppError::InternalError)` - The output was not valid UTF-8
pub fn complaints_to_csv(complaints: &[Complaint]) -> Result<String, AppError> {
    let mut buffer = format!("{}\n", COMPLAINT_CSV_HEADER).into_bytes();

    {
        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Always)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(&mut buffer);

        for complaint in complaints {
            let created = complaint.created_at.format(DATE_FORMAT).to_string();
            let updated = complaint.updated_at.format(DATE_FORMAT).to_string();
            writer.write_record([
                complaint.complaint_id.as_str(),
                complaint.order_id.as_str(),
                complaint.issue_type.as_str(),
                complaint.status.as_str(),
                complaint.description.as_str(),
                created.as_str(),
                updated.as_str(),
            ])?;
        }

        writer.flush()?;
    }

    String::from_utf8(buffer)
        .map_err(|e| AppError::InternalError(format!("CSV export is not UTF-8: {}", e)))
}
