use anyhow::Result;
use debug_sql_formatter::{
    config::Config, input::read_debug_text, process_debug_query, render_report,
};
use std::io::{self, Write};

fn main() -> Result<()> {
    let config = Config::default();

    // 日志初始化失败不影响格式化输出
    #[cfg(feature = "logging")]
    if let Err(e) = config
        .log_config()
        .and_then(|c| debug_sql_formatter::logging::init_logging(c).map_err(Into::into))
    {
        eprintln!("日志初始化失败: {e}");
    }

    let text = read_debug_text(io::stdin().lock())?;
    let result = process_debug_query(&text, &config.format);

    let mut stdout = io::stdout().lock();
    stdout.write_all(render_report(&result).as_bytes())?;
    stdout.flush()?;
    Ok(())
}
