//! Rendering of processed tickets.

use std::io::Write;

use serde_json::json;

use super::OutputFormat;
use crate::ticket::Ticket;

/// Line framing each ticket block in text output.
pub const SEPARATOR: &str = "===================================";

/// Notice written when a run has nothing to process.
pub const EMPTY_QUEUE_NOTICE: &str = "Currently there are no tickets in queue.";

pub(crate) fn write_ticket<W: Write + ?Sized>(
    out: &mut W,
    format: OutputFormat,
    ticket: &Ticket,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "{}", SEPARATOR)?;
            writeln!(out, "Processing ticket id: {}", ticket.id())?;
            writeln!(out, "Customer: {}", ticket.customer())?;
            writeln!(out, "Issue: {}", ticket.issue())?;
            writeln!(out, "{}", SEPARATOR)
        }
        OutputFormat::Json => {
            let line = json!({
                "id": ticket.id(),
                "customer": ticket.customer(),
                "issue": ticket.issue(),
                "created_at": ticket.created_at().to_rfc3339(),
            });
            writeln!(out, "{}", line)
        }
    }
}

pub(crate) fn write_empty_notice<W: Write + ?Sized>(
    out: &mut W,
    format: OutputFormat,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", EMPTY_QUEUE_NOTICE),
        OutputFormat::Json => writeln!(out, "{}", json!({ "notice": EMPTY_QUEUE_NOTICE })),
    }
}
