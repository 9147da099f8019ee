use anyhow::{Context, Result};

use crate::ir::VennData;

/// Parses diagram input. Strict JSON is tried first; JSON5 (comments, trailing
/// commas, unquoted keys) is accepted as a fallback.
pub fn parse_venn(input: &str) -> Result<VennData> {
    let data = match serde_json::from_str::<VennData>(input) {
        Ok(data) => data,
        Err(json_err) => json5::from_str::<VennData>(input)
            .with_context(|| format!("input is neither JSON ({json_err}) nor JSON5"))?,
    };
    validate(&data)?;
    Ok(data)
}

fn validate(data: &VennData) -> Result<()> {
    for (idx, member) in data.members.iter().enumerate() {
        if member.group_ids.is_empty() {
            return Err(anyhow::anyhow!(
                "member #{} (`{}`) has no group ids",
                idx,
                member.name
            ));
        }
    }
    for (idx, group) in data.groups.iter().enumerate() {
        if data.groups[..idx].iter().any(|other| other.id == group.id) {
            return Err(anyhow::anyhow!("duplicate group id `{}`", group.id));
        }
    }
    Ok(())
}
