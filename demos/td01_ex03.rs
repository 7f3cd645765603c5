use gl_td::exercises::BackgroundPainter;

fn main() -> gl_td::Result<()> {
    gl_td::init_logging()?;
    gl_td::run(BackgroundPainter::new())
}
