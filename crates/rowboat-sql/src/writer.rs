use rowboat_core::Flavor;

use std::fmt::Write;

/// Incrementally builds one SQL statement in a given dialect.
///
/// The writer owns the placeholder counter, so numbered dialects come out
/// with correct running numbers no matter how a statement is assembled.
pub(crate) struct Writer {
    dst: String,
    flavor: Flavor,
    placeholders: usize,
}

impl Writer {
    pub(crate) fn new(flavor: Flavor) -> Writer {
        Writer {
            dst: String::new(),
            flavor,
            placeholders: 0,
        }
    }

    /// Appends raw SQL text.
    pub(crate) fn push(&mut self, part: &str) {
        self.dst.push_str(part);
    }

    /// Appends a quoted identifier. Embedded quote characters are doubled.
    pub(crate) fn ident(&mut self, name: &str) {
        let quote = match self.flavor {
            Flavor::MySql => '`',
            Flavor::PostgreSql | Flavor::Sqlite => '"',
        };
        self.dst.push(quote);
        for ch in name.chars() {
            self.dst.push(ch);
            if ch == quote {
                self.dst.push(quote);
            }
        }
        self.dst.push(quote);
    }

    /// Appends the next bind placeholder in the dialect's form.
    pub(crate) fn placeholder(&mut self) {
        self.placeholders += 1;
        match self.flavor {
            Flavor::MySql => self.dst.push('?'),
            Flavor::PostgreSql => write!(&mut self.dst, "${}", self.placeholders).unwrap(),
            Flavor::Sqlite => write!(&mut self.dst, "?{}", self.placeholders).unwrap(),
        }
    }

    /// Appends a caller-written clause body, rewriting each `?` mark into
    /// the dialect's placeholder form with running numbering.
    pub(crate) fn fragment(&mut self, clause: &str) {
        for ch in clause.chars() {
            if ch == '?' {
                self.placeholder();
            } else {
                self.dst.push(ch);
            }
        }
    }

    pub(crate) fn into_sql(self) -> String {
        self.dst
    }
}
