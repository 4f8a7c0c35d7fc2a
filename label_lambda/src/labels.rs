//! Serializable view of a Rekognition `DetectLabels` response.
//!
//! The SDK output types carry no serde support, so the response is copied into
//! these structs before it is written out. Field names follow the service's
//! PascalCase wire names and absent values are left out of the JSON.

use aws_sdk_rekognition::operation::detect_labels::DetectLabelsOutput;
use aws_sdk_rekognition::types::{BoundingBox, Instance, Label};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct LabelDetection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<DetectedLabel>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation_correction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_model_version: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct DetectedLabel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instances: Option<Vec<LabelInstance>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parents: Option<Vec<LabelName>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<LabelName>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<LabelName>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct LabelInstance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<Region>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
}

/// Box coordinates as ratios of the image dimensions.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct Region {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f32>,
}

/// Parents, aliases and categories are all bare `{ "Name": .. }` objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct LabelName {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

fn names<T>(items: Option<Vec<T>>, name: impl Fn(T) -> Option<String>) -> Option<Vec<LabelName>> {
    items.map(|items| {
        items
            .into_iter()
            .map(|item| LabelName { name: name(item) })
            .collect()
    })
}

impl From<BoundingBox> for Region {
    fn from(bounding_box: BoundingBox) -> Self {
        Self {
            width: bounding_box.width,
            height: bounding_box.height,
            left: bounding_box.left,
            top: bounding_box.top,
        }
    }
}

impl From<Instance> for LabelInstance {
    fn from(instance: Instance) -> Self {
        Self {
            bounding_box: instance.bounding_box.map(Region::from),
            confidence: instance.confidence,
        }
    }
}

impl From<Label> for DetectedLabel {
    fn from(label: Label) -> Self {
        Self {
            name: label.name,
            confidence: label.confidence,
            instances: label
                .instances
                .map(|instances| instances.into_iter().map(LabelInstance::from).collect()),
            parents: names(label.parents, |parent| parent.name),
            aliases: names(label.aliases, |alias| alias.name),
            categories: names(label.categories, |category| category.name),
        }
    }
}

impl From<DetectLabelsOutput> for LabelDetection {
    fn from(output: DetectLabelsOutput) -> Self {
        Self {
            labels: output
                .labels
                .map(|labels| labels.into_iter().map(DetectedLabel::from).collect()),
            orientation_correction: output
                .orientation_correction
                .map(|orientation| orientation.as_str().to_string()),
            label_model_version: output.label_model_version,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_rekognition::types::Parent;

    #[test]
    fn test_pretty_json_matches_response() {
        let output = DetectLabelsOutput::builder()
            .labels(Label::builder().name("Cat").confidence(91.2).build())
            .build();
        let json = serde_json::to_string_pretty(&LabelDetection::from(output)).unwrap();
        let expected = r#"{
  "Labels": [
    {
      "Name": "Cat",
      "Confidence": 91.2
    }
  ]
}"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_instances_and_parents() {
        let label = Label::builder()
            .name("Dog")
            .confidence(98.5)
            .instances(
                Instance::builder()
                    .bounding_box(
                        BoundingBox::builder()
                            .width(0.5)
                            .height(0.25)
                            .left(0.125)
                            .top(0.75)
                            .build(),
                    )
                    .confidence(97.0)
                    .build(),
            )
            .parents(Parent::builder().name("Animal").build())
            .build();
        let output = DetectLabelsOutput::builder()
            .labels(label)
            .label_model_version("3.0")
            .build();
        let value = serde_json::to_value(LabelDetection::from(output)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "Labels": [{
                    "Name": "Dog",
                    "Confidence": 98.5,
                    "Instances": [{
                        "BoundingBox": { "Width": 0.5, "Height": 0.25, "Left": 0.125, "Top": 0.75 },
                        "Confidence": 97.0
                    }],
                    "Parents": [{ "Name": "Animal" }]
                }],
                "LabelModelVersion": "3.0"
            })
        );
    }

    #[test]
    fn test_empty_response() {
        let detection = LabelDetection::from(DetectLabelsOutput::builder().build());
        assert_eq!(serde_json::to_string(&detection).unwrap(), "{}");
    }
}
