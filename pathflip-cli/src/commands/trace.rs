use std::path::Path;

use anyhow::Context;
use pathflip::{
    classify::EntryKind,
    trace::{DecodeConfig, Trace, TraceEntry, TraceSummary},
};
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::flag_names,
    output::{field, print_output, yes_no, Columns},
};

#[derive(Debug, Serialize)]
struct EntryInfo {
    offset: String,
    kind: String,
    opcode: String,
    code: u32,
    payload_len: usize,
    candidate: bool,
    flags: String,
}

impl From<&TraceEntry<'_>> for EntryInfo {
    fn from(entry: &TraceEntry<'_>) -> Self {
        let kind = match entry.kind {
            EntryKind::Constraint(kind) => kind.to_string(),
            EntryKind::Event => "event".to_string(),
        };
        EntryInfo {
            offset: format!("0x{:06x}", entry.offset),
            kind,
            opcode: entry.opcode.to_string(),
            code: entry.opcode.code(),
            payload_len: entry.payload.len(),
            candidate: entry.is_candidate(),
            flags: flag_names(entry.flags()),
        }
    }
}

#[derive(Debug, Serialize)]
struct SummaryInfo {
    entries: usize,
    constraints: usize,
    interpretable: usize,
    reversible: usize,
    candidates: usize,
    unknown_opcodes: usize,
    structural: usize,
    concurrency: usize,
    builtin: usize,
}

impl From<TraceSummary> for SummaryInfo {
    fn from(s: TraceSummary) -> Self {
        SummaryInfo {
            entries: s.entries,
            constraints: s.constraints,
            interpretable: s.interpretable,
            reversible: s.reversible,
            candidates: s.candidates,
            unknown_opcodes: s.unknown_opcodes,
            structural: s.structural,
            concurrency: s.concurrency,
            builtin: s.builtin,
        }
    }
}

#[derive(Debug, Serialize)]
struct TraceOutput {
    file: String,
    size: usize,
    strict: bool,
    summary: SummaryInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    entries: Option<Vec<EntryInfo>>,
}

pub fn run(path: &Path, strict: bool, list: bool, opts: &GlobalOptions) -> anyhow::Result<()> {
    let trace = Trace::from_file(path)
        .with_context(|| format!("failed to load trace: {}", path.display()))?;

    let config = if strict {
        DecodeConfig::strict()
    } else {
        DecodeConfig::lenient()
    };

    let mut summary = TraceSummary::default();
    let mut entries = Vec::new();
    for entry in trace.entries(config)? {
        let entry = entry.with_context(|| format!("failed to decode trace: {}", path.display()))?;
        summary.record(&entry);
        if list {
            entries.push(EntryInfo::from(&entry));
        }
    }

    if summary.unknown_opcodes > 0 {
        log::warn!(
            "{} entries carry opcodes outside the tag catalogue",
            summary.unknown_opcodes
        );
    }

    let output = TraceOutput {
        file: path.display().to_string(),
        size: trace.len(),
        strict,
        summary: summary.into(),
        entries: list.then_some(entries),
    };

    print_output(&output, opts, |out| {
        if let Some(entries) = &out.entries {
            let mut table =
                Columns::new(&["Offset", "Kind", "Opcode", "Code", "Payload", "Candidate"])
                    .right(&[3, 4]);
            for e in entries {
                table.row(vec![
                    e.offset.clone(),
                    e.kind.clone(),
                    e.opcode.clone(),
                    e.code.to_string(),
                    e.payload_len.to_string(),
                    yes_no(e.candidate).to_string(),
                ]);
            }
            table.print();
            println!();
        }

        let s = &out.summary;
        field("File", format!("{} ({} bytes)", out.file, out.size));
        field("Entries", s.entries);
        field("Constraints", s.constraints);
        field("Interpretable", s.interpretable);
        field("Reversible", s.reversible);
        field("Candidates", s.candidates);
        field(
            "Families",
            format!(
                "{} structural, {} concurrency, {} builtin",
                s.structural, s.concurrency, s.builtin
            ),
        );
        if s.unknown_opcodes > 0 {
            field("Unknown opcodes", s.unknown_opcodes);
        }
    })
}
