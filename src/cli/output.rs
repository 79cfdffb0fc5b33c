use anyhow::Result;
use dualist::{Item, TransferOutcome};

/// Format the outcome as `left:`/`right:` id lines, or a cancellation notice.
pub(crate) fn format_plain(outcome: &TransferOutcome) -> String {
	if !outcome.accepted {
		return "Transfer cancelled".to_string();
	}

	format!(
		"{}\n{}",
		side_line("left", &outcome.left),
		side_line("right", &outcome.right)
	)
}

fn side_line(label: &str, items: &[Item]) -> String {
	let ids: Vec<String> = items.iter().map(|item| item.id.to_string()).collect();
	if ids.is_empty() {
		format!("{label}:")
	} else {
		format!("{label}: {}", ids.join(", "))
	}
}

/// Print a plain-text representation of the transfer outcome.
pub(crate) fn print_plain(outcome: &TransferOutcome) {
	println!("{}", format_plain(outcome));
}

/// Format the transfer outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &TransferOutcome) -> Result<String> {
	Ok(serde_json::to_string_pretty(outcome)?)
}

/// Print the JSON representation of the transfer outcome.
pub(crate) fn print_json(outcome: &TransferOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use serde_json::Value;

	use super::*;

	fn outcome(accepted: bool) -> TransferOutcome {
		TransferOutcome {
			accepted,
			left: vec![Item::new(1, "Item 1"), Item::new(2, "Item 2")],
			right: vec![Item::new(3, "Item 3")],
		}
	}

	#[test]
	fn plain_lists_ids_per_side() {
		assert_eq!(format_plain(&outcome(true)), "left: 1, 2\nright: 3");
	}

	#[test]
	fn plain_reports_cancellation() {
		assert_eq!(format_plain(&outcome(false)), "Transfer cancelled");
	}

	#[test]
	fn plain_handles_empty_sides() {
		let outcome = TransferOutcome {
			accepted: true,
			left: Vec::new(),
			right: vec![Item::new(7, "Seven")],
		};
		assert_eq!(format_plain(&outcome), "left:\nright: 7");
	}

	#[test]
	fn json_format_includes_both_sides() {
		let json = format_outcome_json(&outcome(true)).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["accepted"], true);
		assert_eq!(value["left"][1]["name"], "Item 2");
		assert_eq!(value["right"][0]["id"], 3);
	}
}
