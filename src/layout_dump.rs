use crate::ir::{GroupId, Member};
use crate::layout::{Bounds, Model, RenderSurface};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct ModelDump {
    pub labels: Vec<LabelDump>,
    pub circles: Vec<CircleDump>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelDump {
    pub x: f64,
    pub y: f64,
    pub content: String,
    pub members: Vec<Member>,
    pub group_ids: Vec<GroupId>,
    pub bounds: Option<Bounds>,
}

/// Keys the dump computes itself; group attributes with these names are dropped.
const CIRCLE_FIELDS: [&str; 5] = ["id", "x", "y", "r", "labels"];

#[derive(Debug, Serialize)]
pub struct CircleDump {
    pub id: GroupId,
    #[serde(flatten)]
    pub attrs: serde_json::Map<String, serde_json::Value>,
    pub x: f64,
    pub y: f64,
    pub r: f64,
    pub labels: Vec<usize>,
}

impl ModelDump {
    pub fn from_model<S: RenderSurface + ?Sized>(model: &Model, surface: &S) -> Self {
        let labels = model
            .labels
            .iter()
            .map(|label| LabelDump {
                x: label.x,
                y: label.y,
                content: label.content(),
                members: label.members.clone(),
                group_ids: label.group_ids.clone(),
                bounds: label.visual.and_then(|id| surface.bounds(id)),
            })
            .collect();

        let circles = model
            .circles
            .iter()
            .map(|circle| {
                let mut attrs = circle.group.attrs.clone();
                attrs.retain(|key, _| !CIRCLE_FIELDS.contains(&key.as_str()));
                CircleDump {
                    id: circle.group.id.clone(),
                    attrs,
                    x: circle.x,
                    y: circle.y,
                    r: circle.r,
                    labels: circle.labels.clone(),
                }
            })
            .collect();

        ModelDump { labels, circles }
    }
}

pub fn write_model_dump<S: RenderSurface + ?Sized>(
    output: Option<&Path>,
    model: &Model,
    surface: &S,
) -> anyhow::Result<()> {
    let dump = ModelDump::from_model(model, surface);
    match output {
        Some(path) => {
            let writer = BufWriter::new(File::create(path)?);
            serde_json::to_writer_pretty(writer, &dump)?;
        }
        None => {
            println!("{}", serde_json::to_string_pretty(&dump)?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::ir::{Group, VennData};
    use crate::layout::build_model;
    use crate::surface::TextSurface;
    use crate::theme::Theme;

    #[test]
    fn dump_matches_output_shape() {
        let data = VennData {
            groups: vec![Group::new("g1").with_attr("color", "#123456")],
            members: vec![Member::new("A", ["g1"])],
        };
        let mut surface = TextSurface::new(&Theme::classic(), true);
        let model = build_model(&data, &mut surface, &LayoutConfig::default()).unwrap();
        let value = serde_json::to_value(ModelDump::from_model(&model, &surface)).unwrap();

        let label = &value["labels"][0];
        assert_eq!(label["groupIds"][0], "g1");
        assert_eq!(label["members"][0]["name"], "A");
        assert!(label["bounds"]["topLeft"]["x"].is_number());

        let circle = &value["circles"][0];
        assert_eq!(circle["id"], "g1");
        assert_eq!(circle["color"], "#123456");
        assert!(circle["r"].as_f64().unwrap() > 5.0);
        assert_eq!(circle["labels"][0], 0);
    }

    #[test]
    fn computed_fields_win_over_group_attrs() {
        let data = VennData {
            groups: vec![
                Group::new("g1")
                    .with_attr("r", 1)
                    .with_attr("x", "left")
                    .with_attr("labels", "none")
                    .with_attr("color", "red"),
            ],
            members: vec![Member::new("A", ["g1"])],
        };
        let mut surface = TextSurface::new(&Theme::classic(), true);
        let model = build_model(&data, &mut surface, &LayoutConfig::default()).unwrap();
        let json = serde_json::to_string(&ModelDump::from_model(&model, &surface)).unwrap();

        let circles = &json[json.find("\"circles\"").unwrap()..];
        assert_eq!(circles.matches("\"r\":").count(), 1);
        assert_eq!(circles.matches("\"x\":").count(), 1);
        assert_eq!(circles.matches("\"labels\":").count(), 1);

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let circle = &value["circles"][0];
        assert!((circle["r"].as_f64().unwrap() - model.circles[0].r).abs() < 1e-9);
        assert!((circle["x"].as_f64().unwrap() - model.circles[0].x).abs() < 1e-9);
        assert_eq!(circle["labels"][0], 0);
        assert_eq!(circle["color"], "red");
    }
}
