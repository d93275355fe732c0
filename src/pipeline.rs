use crate::config::LayoutConfig;
use crate::export::{Exporter, LabelOutput};
use crate::font::TextRasterizer;
use crate::layout::{ComposedLabel, LabelComposer};
use crate::request::LayoutRequest;
use crate::symbol::SymbolEncoder;
use crate::units::Resolution;
use crate::LabelError;

/// Drives a request through layout and export: validate → compose → export.
///
/// The pipeline borrows its collaborators, so one font or encoder can serve any
/// number of pipelines and requests. Every run either produces complete output
/// or fails with the first error.
///
/// ```
/// use label_gen::{BuiltinEncoder, LabelExporter, LabelPipeline, TtfRasterizer};
/// use label_gen::{LayoutRequest, SizeClass, SymbolFamily, TextSpec, Mm};
///
/// let font = TtfRasterizer::embedded().expect("can load font");
/// let exporter = LabelExporter::default();
/// let pipeline = LabelPipeline::new(&BuiltinEncoder, &font, &exporter);
///
/// let request = LayoutRequest::new("https://example.com/p/42", SymbolFamily::Square, Mm(50.0), Mm(50.0), 203)
///     .with_text(TextSpec::below("Product 42", SizeClass::Small));
/// let output = pipeline.generate(&request).expect("label generates");
/// assert!(output.commands_text().starts_with("^XA"));
/// ```
pub struct LabelPipeline<'a> {
    encoder: &'a dyn SymbolEncoder,
    rasterizer: &'a dyn TextRasterizer,
    exporter: &'a dyn Exporter,
    config: LayoutConfig,
}

impl<'a> LabelPipeline<'a> {
    /// Create a pipeline with the default [LayoutConfig]
    pub fn new(
        encoder: &'a dyn SymbolEncoder,
        rasterizer: &'a dyn TextRasterizer,
        exporter: &'a dyn Exporter,
    ) -> Self {
        LabelPipeline {
            encoder,
            rasterizer,
            exporter,
            config: LayoutConfig::default(),
        }
    }

    /// Replace the default layout configuration
    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Validate and compose the label without exporting it
    pub fn layout(&self, request: &LayoutRequest) -> Result<ComposedLabel, LabelError> {
        let resolution = Resolution::try_from(request.dpi)?;
        self.config.validate()?;
        log::debug!(
            "laying out {} label {}x{}mm at {resolution} with {} line(s) of text",
            request.family,
            request.width,
            request.height,
            request.text.len()
        );

        LabelComposer::new(self.encoder, self.rasterizer, &self.config).compose(request)
    }

    /// Compose the label and export it to both the raster container and the
    /// printer command stream
    pub fn generate(&self, request: &LayoutRequest) -> Result<LabelOutput, LabelError> {
        let label = self.layout(request)?;

        let png = self.exporter.to_raster_container(&label.canvas)?;
        let commands = self.exporter.to_printer_commands(&label.canvas)?;
        log::debug!(
            "exported {} bytes of raster and {} bytes of printer commands",
            png.len(),
            commands.len()
        );

        Ok(LabelOutput { png, commands })
    }
}
