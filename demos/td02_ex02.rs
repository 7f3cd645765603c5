use gl_td::exercises::PrimitivePicker;

fn main() -> gl_td::Result<()> {
    gl_td::init_logging()?;
    gl_td::run(PrimitivePicker::new())
}
