use serde::Serialize;

use crate::config::SignatureMode;
use crate::ir::{Group, GroupId, Member};

use super::LayoutError;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Axis-aligned box of a rendered label, as four corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    pub top_left: Point,
    pub top_right: Point,
    pub bottom_left: Point,
    pub bottom_right: Point,
}

impl Bounds {
    pub fn from_rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            top_left: Point::new(x, y),
            top_right: Point::new(x + width, y),
            bottom_left: Point::new(x, y + height),
            bottom_right: Point::new(x + width, y + height),
        }
    }

    pub fn corners(&self) -> [Point; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_left,
            self.bottom_right,
        ]
    }

    pub fn width(&self) -> f64 {
        self.top_right.x - self.top_left.x
    }

    pub fn height(&self) -> f64 {
        self.bottom_left.y - self.top_left.y
    }
}

/// Opaque handle to an item owned by a [`super::RenderSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct VisualId(pub usize);

/// Members sharing one group signature, drawn as a single text item.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub members: Vec<Member>,
    pub group_ids: Vec<GroupId>,
    pub x: f64,
    pub y: f64,
    pub visual: Option<VisualId>,
}

impl Label {
    pub fn new(members: Vec<Member>, mode: SignatureMode) -> Result<Self, LayoutError> {
        let first = members.first().ok_or(LayoutError::EmptyLabel)?;
        let group_ids = first.group_ids.clone();
        for member in &members[1..] {
            check_signature(&group_ids, member, mode)?;
        }
        Ok(Self {
            members,
            group_ids,
            x: 0.0,
            y: 0.0,
            visual: None,
        })
    }

    pub fn push(&mut self, member: Member, mode: SignatureMode) -> Result<(), LayoutError> {
        check_signature(&self.group_ids, &member, mode)?;
        self.members.push(member);
        Ok(())
    }

    pub fn accepts(&self, member: &Member, mode: SignatureMode) -> bool {
        mode.matches(&self.group_ids, &member.group_ids)
    }

    pub fn belongs_to(&self, id: &GroupId) -> bool {
        self.group_ids.iter().any(|gid| gid == id)
    }

    /// Text shown for the label: member names joined by commas.
    pub fn content(&self) -> String {
        self.members
            .iter()
            .map(|m| m.name.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

fn check_signature(
    expected: &[GroupId],
    member: &Member,
    mode: SignatureMode,
) -> Result<(), LayoutError> {
    if mode.matches(expected, &member.group_ids) {
        return Ok(());
    }
    Err(LayoutError::GroupMismatch {
        expected: expected.to_vec(),
        found: member.group_ids.clone(),
        member: member.name.clone(),
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub group: Group,
    pub x: f64,
    pub y: f64,
    pub r: f64,
    /// Indices into [`Model::labels`].
    pub labels: Vec<usize>,
}

impl Circle {
    pub fn id(&self) -> &GroupId {
        &self.group.id
    }

    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Model {
    pub groups: Vec<Group>,
    pub labels: Vec<Label>,
    pub circles: Vec<Circle>,
}

impl Model {
    pub fn circle(&self, id: &GroupId) -> Option<&Circle> {
        self.circles.iter().find(|c| c.id() == id)
    }

    pub fn circle_labels<'a>(&'a self, circle: &'a Circle) -> impl Iterator<Item = &'a Label> + 'a {
        circle.labels.iter().filter_map(|&idx| self.labels.get(idx))
    }
}
