use gl_td::exercises::FormGallery;

fn main() -> gl_td::Result<()> {
    gl_td::init_logging()?;
    gl_td::run(FormGallery::new())
}
