use crate::PrintCfg;

use super::Print;
use super::PrintExt;

pub trait PrintToString {
    /// Render to a string, dropping the indentation that the layout leaves on blank lines.
    fn print_to_string(&self, cfg: Option<&PrintCfg>) -> String;
}

impl<T: Print> PrintToString for T {
    fn print_to_string(&self, cfg: Option<&PrintCfg>) -> String {
        let mut buf = Vec::new();
        let def = PrintCfg::default();
        let cfg = cfg.unwrap_or(&def);
        // Writing into a `Vec` cannot fail.
        let _ = <T as PrintExt>::print_io(self, cfg, &mut buf);
        let rendered = String::from_utf8_lossy(&buf);
        let mut out = String::with_capacity(rendered.len());
        for line in rendered.lines() {
            out.push_str(line.trim_end());
            out.push('\n');
        }
        if !rendered.ends_with('\n') {
            out.pop();
        }
        out
    }
}
