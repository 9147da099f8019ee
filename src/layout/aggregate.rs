use crate::config::SignatureMode;
use crate::ir::Member;

use super::{Label, LayoutError};

/// Merges members with matching group signatures into labels, keeping labels in
/// the order their first member was seen.
pub(crate) fn aggregate_labels(
    members: &[Member],
    mode: SignatureMode,
) -> Result<Vec<Label>, LayoutError> {
    let mut labels: Vec<Label> = Vec::new();
    for member in members {
        match labels.iter_mut().find(|label| label.accepts(member, mode)) {
            Some(label) => label.push(member.clone(), mode)?,
            None => labels.push(Label::new(vec![member.clone()], mode)?),
        }
    }
    Ok(labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::GroupId;

    fn names(label: &Label) -> Vec<&str> {
        label.members.iter().map(|m| m.name.as_str()).collect()
    }

    #[test]
    fn merges_identical_signatures() {
        let members = vec![
            Member::new("A", ["g1"]),
            Member::new("B", ["g1"]),
            Member::new("C", ["g2"]),
        ];
        let labels = aggregate_labels(&members, SignatureMode::Ordered).unwrap();
        assert_eq!(labels.len(), 2);
        assert_eq!(names(&labels[0]), ["A", "B"]);
        assert_eq!(labels[0].group_ids, vec![GroupId::new("g1")]);
        assert_eq!(names(&labels[1]), ["C"]);
        assert_eq!(labels[1].group_ids, vec![GroupId::new("g2")]);
    }

    #[test]
    fn labels_follow_first_encounter_order() {
        let members = vec![
            Member::new("x", ["b"]),
            Member::new("y", ["a"]),
            Member::new("z", ["b"]),
            Member::new("w", ["a", "b"]),
        ];
        let labels = aggregate_labels(&members, SignatureMode::Ordered).unwrap();
        let contents: Vec<String> = labels.iter().map(Label::content).collect();
        assert_eq!(contents, ["x,z", "y", "w"]);
    }

    #[test]
    fn ordered_mode_keeps_permuted_signatures_apart() {
        let members = vec![Member::new("A", ["g1", "g2"]), Member::new("B", ["g2", "g1"])];
        let labels = aggregate_labels(&members, SignatureMode::Ordered).unwrap();
        assert_eq!(labels.len(), 2);
    }

    #[test]
    fn unordered_mode_merges_permuted_signatures() {
        let members = vec![Member::new("A", ["g1", "g2"]), Member::new("B", ["g2", "g1"])];
        let labels = aggregate_labels(&members, SignatureMode::Unordered).unwrap();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].content(), "A,B");
        assert_eq!(
            labels[0].group_ids,
            vec![GroupId::new("g1"), GroupId::new("g2")]
        );
    }

    #[test]
    fn prefix_signature_is_not_a_match() {
        let members = vec![Member::new("A", ["g1"]), Member::new("B", ["g1", "g2"])];
        let labels = aggregate_labels(&members, SignatureMode::Ordered).unwrap();
        assert_eq!(labels.len(), 2);
    }

    #[test]
    fn every_member_lands_in_exactly_one_label() {
        let members: Vec<Member> = (0..40)
            .map(|i| {
                let groups: Vec<String> = (0..3)
                    .filter(|bit| (i >> bit) & 1 == 1 || bit == &(i % 3))
                    .map(|bit| format!("g{bit}"))
                    .collect();
                Member::new(format!("m{i}"), groups)
            })
            .collect();
        let labels = aggregate_labels(&members, SignatureMode::Ordered).unwrap();
        let mut seen: Vec<&str> = labels
            .iter()
            .flat_map(|l| l.members.iter().map(|m| m.name.as_str()))
            .collect();
        seen.sort_unstable();
        let mut expected: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();
        expected.sort_unstable();
        assert_eq!(seen, expected);
        for label in &labels {
            for member in &label.members {
                assert_eq!(member.group_ids, label.group_ids);
            }
        }
    }

    #[test]
    fn hand_built_label_rejects_mismatched_members() {
        let err = Label::new(
            vec![Member::new("A", ["g1"]), Member::new("B", ["g2"])],
            SignatureMode::Ordered,
        )
        .unwrap_err();
        assert!(matches!(err, LayoutError::GroupMismatch { ref member, .. } if member == "B"));

        let mut label = Label::new(vec![Member::new("A", ["g1"])], SignatureMode::Ordered).unwrap();
        assert!(label.push(Member::new("C", ["g1", "g2"]), SignatureMode::Ordered).is_err());
        assert_eq!(label.members.len(), 1);
    }

    #[test]
    fn empty_label_is_rejected() {
        assert_eq!(
            Label::new(Vec::new(), SignatureMode::Ordered).unwrap_err(),
            LayoutError::EmptyLabel
        );
    }
}
