//! A minimal line-oriented source accumulator.
//!
//! Generated artifacts are assembled as plain text, one line at a time,
//! so the output for a given descriptor is byte-for-byte reproducible.
//! The joiner is append-only: a line is never rewritten or removed once
//! pushed, and the final text is every line in insertion order, each
//! terminated by a single newline.

/// Append-only line accumulator with indexed-placeholder templates.
pub(crate) struct LineJoiner {
    buf: String,
}

impl LineJoiner {
    pub(crate) fn new() -> Self {
        Self { buf: String::new() }
    }

    /// Appends one literal line.
    pub(crate) fn line(&mut self, text: &str) -> &mut Self {
        self.buf.push_str(text);
        self.buf.push('\n');
        self
    }

    /// Appends a line rendered from `template`, substituting `{0}`,
    /// `{1}`, … with the corresponding argument. Placeholders may repeat;
    /// lone braces in the template pass through untouched, which keeps
    /// block-opening lines readable.
    pub(crate) fn linef(&mut self, template: &str, args: &[&str]) -> &mut Self {
        let rendered = fill(template, args);
        self.line(&rendered)
    }

    /// Appends the literal line only when `condition` holds.
    pub(crate) fn line_if(&mut self, condition: bool, text: &str) -> &mut Self {
        if condition {
            self.line(text);
        }
        self
    }

    /// Appends one rendered line per entry, in iteration order. `project`
    /// turns each entry's key and value into the template's positional
    /// arguments.
    pub(crate) fn line_per_entry<K, V, I, P>(
        &mut self,
        entries: I,
        template: &str,
        project: P,
    ) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        P: Fn(&K, &V) -> Vec<String>,
    {
        for (key, value) in entries {
            let args = project(&key, &value);
            let refs: Vec<&str> = args.iter().map(String::as_str).collect();
            self.linef(template, &refs);
        }
        self
    }

    /// Consumes the joiner and returns the accumulated text.
    pub(crate) fn finish(self) -> String {
        self.buf
    }
}

fn fill(template: &str, args: &[&str]) -> String {
    let mut out = template.to_owned();
    for (index, arg) in args.iter().enumerate() {
        out = out.replace(&format!("{{{index}}}"), arg);
    }
    out
}
