use pathflip::{
    classify::{is_interpretable, is_reversible_bif},
    protocol::{TagFamily, TraceEntryTag, WireCode},
};
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::{
    app::{FamilyArg, GlobalOptions},
    commands::common::flag_names,
    output::{print_output, yes_no, Columns},
};

#[derive(Debug, Serialize)]
struct TagInfo {
    code: u32,
    name: String,
    family: String,
    interpretable: bool,
    reversible_bif: bool,
    flags: String,
}

#[derive(Debug, Serialize)]
struct TagsOutput {
    tags: Vec<TagInfo>,
}

impl From<FamilyArg> for TagFamily {
    fn from(arg: FamilyArg) -> Self {
        match arg {
            FamilyArg::Structural => TagFamily::Structural,
            FamilyArg::Concurrency => TagFamily::Concurrency,
            FamilyArg::Builtin => TagFamily::Builtin,
        }
    }
}

pub fn run(family: Option<FamilyArg>, opts: &GlobalOptions) -> anyhow::Result<()> {
    let filter = family.map(TagFamily::from);
    let tags = TraceEntryTag::iter()
        .filter(|tag| filter.map_or(true, |f| tag.family() == f))
        .map(|tag| {
            TagInfo {
                code: tag.code(),
                name: tag.to_string(),
                family: tag.family().to_string(),
                interpretable: is_interpretable(tag),
                reversible_bif: is_reversible_bif(tag),
                flags: flag_names(tag.flags()),
            }
        })
        .collect();

    let output = TagsOutput { tags };

    print_output(&output, opts, |out| {
        let mut table =
            Columns::new(&["Code", "Name", "Family", "Interpretable", "Reversible BIF"])
                .right(&[0]);
        for tag in &out.tags {
            table.row(vec![
                tag.code.to_string(),
                tag.name.clone(),
                tag.family.clone(),
                yes_no(tag.interpretable).to_string(),
                yes_no(tag.reversible_bif).to_string(),
            ]);
        }
        table.print();
    })
}
