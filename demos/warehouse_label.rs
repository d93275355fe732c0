use label_gen::labelsize::{self, LabelOrientation};
use label_gen::{
    BuiltinEncoder, LabelExporter, LabelPipeline, LayoutRequest, Mm, PrinterLanguage, SizeClass,
    SymbolFamily, TextSpec, TtfRasterizer, ZplEncoding,
};

fn main() {
    env_logger::init();

    let font = TtfRasterizer::embedded().expect("can load font");
    let zpl = LabelExporter::new(PrinterLanguage::Zpl(ZplEncoding::CompressedAscii));
    let epl = LabelExporter::new(PrinterLanguage::Epl2);

    // a bin location label with a barcode
    let bin = LayoutRequest::new("LOC-A07-B03", SymbolFamily::Rectangular, Mm(0.0), Mm(0.0), 203)
        .with_size(labelsize::MM_50X30)
        .with_text(TextSpec::above("Aisle 7 / Bay 3", SizeClass::Large))
        .with_text(TextSpec::below("LOC-A07-B03", SizeClass::Small));

    let output = LabelPipeline::new(&BuiltinEncoder, &font, &zpl)
        .generate(&bin)
        .expect("can generate bin label");
    std::fs::write("bin-label.png", &output.png).expect("can write png");
    std::fs::write("bin-label.zpl", &output.commands).expect("can write zpl");

    // a product label linking to its page, for an EPL2 printer
    let product = LayoutRequest::new(
        "https://example.com/product/12345",
        SymbolFamily::Square,
        Mm(0.0),
        Mm(0.0),
        300,
    )
    .with_size(labelsize::IN_2_25X1_25.portrait())
    .with_text(TextSpec::below("SKU 12345", SizeClass::Medium));

    let output = LabelPipeline::new(&BuiltinEncoder, &font, &epl)
        .generate(&product)
        .expect("can generate product label");
    std::fs::write("product-label.png", &output.png).expect("can write png");
    std::fs::write("product-label.epl", &output.commands).expect("can write epl");
}
