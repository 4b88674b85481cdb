//! SVG document assembly.
//!
//! [`DocumentBuilder`] is the [`PathSink`] the importer feeds: it collects
//! paths per layer and assembles an [`svg::Document`] with one `<g>` per
//! referenced pen, carrying the Inkscape layer attributes the host editor
//! expects (`inkscape:groupmode`/`inkscape:label`).

use svg::Document;
use svg::node::element::{Group, Path};

use crate::decode::PathSink;
use crate::types::{ImportOptions, Layer, PathStyle};

struct LayerGroup {
    id: Layer,
    paths: Vec<Path>,
}

/// Builds the output document tree as the decoder runs.
///
/// Layer groups appear in creation order: the reserved Movements group
/// first (created eagerly when movement visualization is on), then drawing
/// pens in first-reference order.
pub struct DocumentBuilder {
    width: f64,
    height: f64,
    show_movements: bool,
    layers: Vec<LayerGroup>,
}

impl DocumentBuilder {
    pub fn new(options: &ImportOptions) -> Self {
        let mut builder = Self {
            width: options.doc_width,
            height: options.doc_height,
            show_movements: options.show_movements,
            layers: Vec::new(),
        };
        if options.show_movements {
            builder.layers.push(LayerGroup {
                id: Layer::Movements,
                paths: Vec::new(),
            });
        }
        builder
    }

    fn layer_mut(&mut self, layer: &Layer) -> Option<&mut LayerGroup> {
        // Linear scan: pen counts are tiny (plotters have a handful of pens).
        let index = self.layers.iter().position(|g| g.id == *layer)?;
        self.layers.get_mut(index)
    }

    /// Assemble the final document tree.
    pub fn finish(self) -> Document {
        let mut document = Document::new()
            .set("width", self.width)
            .set("height", self.height);
        for group in self.layers {
            let mut element = Group::new()
                .set("inkscape:groupmode", "layer")
                .set("inkscape:label", group.id.label());
            for path in group.paths {
                element = element.add(path);
            }
            document = document.add(element);
        }
        document
    }
}

impl PathSink for DocumentBuilder {
    fn open_layer(&mut self, layer: &Layer) {
        if self.layer_mut(layer).is_none() {
            self.layers.push(LayerGroup {
                id: layer.clone(),
                paths: Vec::new(),
            });
        }
    }

    fn add_path(&mut self, layer: &Layer, data: String, style: PathStyle) {
        // The Movements group only exists when visualization is enabled;
        // paths routed there while it is disabled are dropped. This covers
        // streams that draw before their first SP command.
        if *layer == Layer::Movements && !self.show_movements {
            crate::log::debug!(d = data.as_str(), "dropping path for disabled Movements layer");
            return;
        }
        let element = Path::new().set("d", data).set("style", style.to_css());
        if self.layer_mut(layer).is_none() {
            self.open_layer(layer);
        }
        if let Some(group) = self.layer_mut(layer) {
            group.paths.push(element);
        }
    }
}
