//! Serializable chart descriptions in the Plotly.js figure schema
//! (`{ data: [...traces], layout: {...} }`), handed as-is to `Plotly.react`.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    /// A figure with nothing to draw.
    pub fn empty() -> Self {
        Figure::default()
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.layout.title = Some(Title::new(title));
        self
    }

    pub fn annotate(mut self, annotation: Annotation) -> Self {
        self.layout.annotations.push(annotation);
        self
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Bar(BarTrace),
    Pie(PieTrace),
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BarTrace {
    pub x: Vec<String>,
    pub y: Vec<f64>,
    /// Printed on each bar.
    pub text: Vec<String>,
    pub textposition: &'static str,
    pub marker: Marker,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PieTrace {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub textinfo: &'static str,
    /// Fraction of the radius cut out of the middle (donut).
    pub hole: f64,
    pub marker: Marker,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: &str) -> Self {
        Title {
            text: text.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Axis {
    pub title: Title,
}

/// Free text pinned to the plotting area, in paper coordinates (0..1).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Annotation {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub xref: &'static str,
    pub yref: &'static str,
    pub xanchor: &'static str,
    pub showarrow: bool,
    pub font: Font,
}

impl Annotation {
    pub fn paper(text: String, x: f64, y: f64) -> Self {
        Annotation {
            text,
            x,
            y,
            xref: "paper",
            yref: "paper",
            xanchor: "center",
            showarrow: false,
            font: Font { size: 14 },
        }
    }

    pub fn anchored(mut self, xanchor: &'static str) -> Self {
        self.xanchor = xanchor;
        self
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Font {
    pub size: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_figure_json() {
        let value = serde_json::to_value(Figure::empty()).unwrap();
        assert_eq!(value, json!({ "data": [], "layout": {} }));
    }

    #[test]
    fn test_trace_tagged_with_plotly_type() {
        let fig = Figure {
            data: vec![Trace::Pie(PieTrace {
                labels: vec!["Support".into()],
                values: vec![50.0],
                textinfo: "label+percent",
                hole: 0.3,
                marker: Marker {
                    color: None,
                    colors: Some(vec!["skyblue".into()]),
                },
            })],
            layout: Layout::default(),
        }
        .with_title("% time");
        let value = serde_json::to_value(fig).unwrap();
        assert_eq!(value["data"][0]["type"], "pie");
        assert_eq!(value["data"][0]["hole"], 0.3);
        assert_eq!(value["data"][0]["marker"], json!({ "colors": ["skyblue"] }));
        assert_eq!(value["layout"]["title"]["text"], "% time");
    }

    #[test]
    fn test_annotation_json() {
        let a = Annotation::paper("Total tickets: 2".into(), 1.0, 1.0).anchored("right");
        let value = serde_json::to_value(a).unwrap();
        assert_eq!(value["xref"], "paper");
        assert_eq!(value["xanchor"], "right");
        assert_eq!(value["showarrow"], false);
        assert_eq!(value["font"]["size"], 14);
    }
}
