use log::LevelFilter;

/// Routes all log records to stderr so stdout carries only the report.
pub fn init(level: LevelFilter) -> Result<(), log::SetLoggerError> {
  fern::Dispatch::new()
    .format(|out, message, record| {
      out.finish(format_args!(
        "[{} {} {}] {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        record.level(),
        record.target(),
        message
      ))
    })
    .level(level)
    .chain(std::io::stderr())
    .apply()
}
