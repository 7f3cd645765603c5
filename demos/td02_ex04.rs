use gl_td::exercises::TransformPlayground;

fn main() -> gl_td::Result<()> {
    gl_td::init_logging()?;
    gl_td::run(TransformPlayground::new())
}
