mod aggregate;
mod enclosing;
mod error;
mod sunflower;
pub(crate) mod types;
pub use enclosing::{EnclosingCircle, smallest_enclosing_circle};
pub use error::LayoutError;
pub use sunflower::{SPREAD_RADIUS, distributed_points};
pub use types::*;

use aggregate::aggregate_labels;
use tracing::{debug, warn};

use crate::config::{EmptyGroupPolicy, LayoutConfig};
use crate::ir::VennData;

/// The drawing side of the layout. The core only asks it to place text and to
/// report the resulting box; the items themselves stay owned by the surface.
pub trait RenderSurface {
    /// Creates a text item when `existing` is `None`, otherwise moves the
    /// existing item. `position` is the text anchor (baseline start).
    fn place_text(
        &mut self,
        existing: Option<VisualId>,
        content: &str,
        position: Point,
    ) -> VisualId;

    fn bounds(&self, id: VisualId) -> Option<Bounds>;
}

/// Aggregates members into labels, spreads them over the sunflower disk and
/// computes the initial circles.
pub fn build_model<S: RenderSurface + ?Sized>(
    data: &VennData,
    surface: &mut S,
    config: &LayoutConfig,
) -> Result<Model, LayoutError> {
    let mut labels = aggregate_labels(&data.members, config.signature_mode)?;
    let points = distributed_points(labels.len(), config.alpha, config.spread_radius);
    for (label, point) in labels.iter_mut().zip(points) {
        label.x = point.x;
        label.y = point.y;
    }
    debug!(
        members = data.members.len(),
        labels = labels.len(),
        groups = data.groups.len(),
        "built venn labels"
    );

    let mut model = Model {
        groups: data.groups.clone(),
        labels,
        circles: Vec::new(),
    };
    recompute(&mut model, surface, config)?;
    Ok(model)
}

/// Re-places every label on the surface and rebuilds all circles from the
/// measured label boxes. Label positions are left untouched. On error the
/// previous circles are kept.
pub fn recompute<S: RenderSurface + ?Sized>(
    model: &mut Model,
    surface: &mut S,
    config: &LayoutConfig,
) -> Result<(), LayoutError> {
    let mut corners: Vec<[Point; 4]> = Vec::with_capacity(model.labels.len());
    for label in &mut model.labels {
        let id = surface.place_text(label.visual, &label.content(), label.position());
        label.visual = Some(id);
        let bounds = surface.bounds(id).ok_or(LayoutError::UnknownVisual(id))?;
        corners.push(bounds.corners());
    }

    let mut circles = Vec::with_capacity(model.groups.len());
    for group in &model.groups {
        let assigned: Vec<usize> = model
            .labels
            .iter()
            .enumerate()
            .filter(|(_, label)| label.belongs_to(&group.id))
            .map(|(idx, _)| idx)
            .collect();
        let points: Vec<Point> = assigned.iter().flat_map(|&idx| corners[idx]).collect();

        let Some(enclosing) = smallest_enclosing_circle(&points) else {
            match config.empty_groups {
                EmptyGroupPolicy::Error => {
                    return Err(LayoutError::EmptyGroup {
                        id: group.id.clone(),
                    });
                }
                EmptyGroupPolicy::Skip => {
                    warn!(group = %group.id, "group has no labels, skipping its circle");
                }
                EmptyGroupPolicy::Collapse => {
                    warn!(group = %group.id, "group has no labels, collapsing its circle");
                    circles.push(Circle {
                        group: group.clone(),
                        x: 0.0,
                        y: 0.0,
                        r: 0.0,
                        labels: Vec::new(),
                    });
                }
            }
            continue;
        };

        circles.push(Circle {
            group: group.clone(),
            x: enclosing.center.x,
            y: enclosing.center.y,
            r: enclosing.radius + config.circle_padding,
            labels: assigned,
        });
    }

    debug!(circles = circles.len(), "recomputed venn circles");
    model.circles = circles;
    Ok(())
}

/// Deep copy of `model`. Every label gets a fresh item on `surface` so the copy
/// never shares drawing state with the original.
pub fn snapshot<S: RenderSurface + ?Sized>(
    model: &Model,
    surface: &mut S,
) -> Result<Model, LayoutError> {
    let mut labels = model.labels.clone();
    for label in &mut labels {
        let id = surface.place_text(None, &label.content(), label.position());
        if surface.bounds(id).is_none() {
            return Err(LayoutError::UnknownVisual(id));
        }
        label.visual = Some(id);
    }
    Ok(Model {
        groups: model.groups.clone(),
        labels,
        circles: model.circles.clone(),
    })
}
