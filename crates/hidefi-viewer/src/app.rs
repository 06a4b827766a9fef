use std::fmt;
use std::io::Write;

use anyhow::Context as _;
use hidefi::keycode::{self, UsageCode};
use hidefi::layout::{get_layout, LayoutDescriptor, LayoutId};
use hidefi::{validate_all, KeyInfo};
use inquire::InquireError;

use crate::config::Command;
use crate::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    IntegrityFailure { dangling: usize },
}

pub fn run(command: &Command, out: &mut impl Write) -> anyhow::Result<Outcome> {
    match command {
        Command::Show { layout, highlight } => {
            let text = render::render(*layout, *highlight).context("render layout")?;
            out.write_all(text.as_bytes())?;
        }
        Command::Lookup { code, layout } => lookup(*code, layout.map(get_layout), out)?,
        Command::Table => table(out)?,
        Command::Check => return check(out),
        Command::Browse => browse(out)?,
    }

    Ok(Outcome::Success)
}

fn lookup(code: UsageCode, layout: Option<&LayoutDescriptor>, out: &mut impl Write) -> anyhow::Result<()> {
    let label = layout.and_then(|layout| layout.find(code).next()).map(|key| key.label);
    let info = KeyInfo::describe(code, label.unwrap_or("Unknown"));

    writeln!(out, "{info}")?;

    if let Some(layout) = layout {
        let mut positions = layout.find(code).peekable();

        if positions.peek().is_none() {
            writeln!(out, "Not present on {}", layout.name)?;
        }

        for key in positions {
            writeln!(
                out,
                "On {}: [{}] {} wide{}",
                layout.name,
                key.label,
                key.width(),
                if key.is_modifier() { ", modifier" } else { "" }
            )?;
        }
    }

    Ok(())
}

fn table(out: &mut impl Write) -> anyhow::Result<()> {
    for descriptor in keycode::entries() {
        let info = KeyInfo::from_descriptor(descriptor);

        writeln!(
            out,
            "{}  {:>3}  {:<34} {:<18} {}",
            info.hex(),
            info.decimal(),
            info.name,
            info.efi_key_display().to_string(),
            info.scan_code_display()
        )?;
    }

    Ok(())
}

fn check(out: &mut impl Write) -> anyhow::Result<Outcome> {
    let dangling = validate_all();

    if dangling.is_empty() {
        let placements: usize = LayoutId::ALL
            .into_iter()
            .map(|id| get_layout(id).placements().count())
            .sum();

        writeln!(
            out,
            "OK: {placements} placements across {} layouts resolve in the key table",
            LayoutId::ALL.len()
        )?;

        return Ok(Outcome::Success);
    }

    for entry in &dangling {
        writeln!(
            out,
            "{}: [{}] references unknown usage code {}",
            entry.layout, entry.placement.label, entry.placement.usage
        )?;
    }

    Ok(Outcome::IntegrityFailure {
        dangling: dangling.len(),
    })
}

/// Finds every placement whose face label matches the query, ignoring ASCII case.
///
/// Labels win over usage codes, so `7` is the digit keys rather than HID 0x07. A query
/// matching no label is read as a usage code (`0x28`, `40`).
pub fn resolve_key(layout: &LayoutDescriptor, query: &str) -> Vec<KeyInfo> {
    let query = query.trim();

    let by_label: Vec<KeyInfo> = layout
        .placements()
        .filter(|key| key.label.eq_ignore_ascii_case(query))
        .map(KeyInfo::for_placement)
        .collect();

    if !by_label.is_empty() {
        return by_label;
    }

    match query.parse::<UsageCode>() {
        Ok(code) => {
            let label = layout.find(code).next().map_or("Unknown", |key| key.label);
            vec![KeyInfo::describe(code, label)]
        }
        Err(_) => Vec::new(),
    }
}

/// Prompt entry for one of several keys sharing a label.
struct Candidate(KeyInfo);

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0.name, self.0.hex())
    }
}

fn select_key(mut matches: Vec<KeyInfo>) -> anyhow::Result<Option<KeyInfo>> {
    if matches.len() < 2 {
        return Ok(matches.pop());
    }

    let candidates = matches.into_iter().map(Candidate).collect();

    match inquire::Select::new("Several keys carry this label:", candidates).prompt() {
        Ok(Candidate(info)) => Ok(Some(info)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(error) => Err(error).context("key choice prompt"),
    }
}

fn select_layout() -> anyhow::Result<Option<LayoutId>> {
    match inquire::Select::new("Layout:", LayoutId::ALL.to_vec()).prompt() {
        Ok(id) => Ok(Some(id)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(error) => Err(error).context("layout prompt"),
    }
}

fn browse(out: &mut impl Write) -> anyhow::Result<()> {
    let Some(mut id) = select_layout()? else {
        return Ok(());
    };

    out.write_all(render::render(id, None)?.as_bytes())?;

    loop {
        let query = match inquire::Text::new("Key label or usage code (empty to switch layout):").prompt() {
            Ok(query) => query,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => return Ok(()),
            Err(error) => return Err(error).context("key prompt"),
        };

        if query.trim().is_empty() {
            let Some(next) = select_layout()? else {
                return Ok(());
            };

            debug!(from = %id, to = %next, "Switch layout");
            id = next;
            out.write_all(render::render(id, None)?.as_bytes())?;
            continue;
        }

        let matches = resolve_key(get_layout(id), &query);

        if matches.is_empty() {
            writeln!(out, "No key `{}` on {}\n", query.trim(), get_layout(id).name)?;
            continue;
        }

        if let Some(info) = select_key(matches)? {
            writeln!(out, "{info}\n")?;
        }
    }
}
