//! Translating template-relative spans into host-file coordinates

use crate::types::{Anchor, FileSpan, TemplateSpan};

/// Translate a parser-reported span into host-file coordinates.
///
/// The template's own first line is line 1 in its local coordinate space and
/// corresponds to `anchor.line` in file space, so both line fields get a
/// uniform `anchor.line - 1` shift:
///
/// ```text
/// 1 export class Sample extends Component {
/// 2     <template>
/// 3         {{debugger}}
/// 4     </template>
/// 5 }
/// ```
///
/// Here the anchor is `{line: 2, column: 14}` and the parser reports the
/// expression at `{line: 2, column: 8}`, which maps to file line 3.
///
/// Columns are only offset for spans that start on the template's first
/// local line, because only there does the file text before the template's
/// opening marker sit on the same line as the span:
///
/// ```text
/// 1 export class Sample extends Component {
/// 2     <template>{{debugger}}
/// 3     </template>
/// 4 }
/// ```
///
/// Now the anchor is `{line: 2, column: 14}`, the parser reports
/// `{line: 1, column: 0}`, and the expression maps to file line 2,
/// column 14. Spans starting past line 1 keep their columns unchanged.
///
/// The end column is offset under the same `span.line == 1` condition, not
/// `span.end_line == 1`. A span that starts on the first template line and
/// ends on a later one therefore gets its end column shifted too. Downstream
/// consumers depend on that exact behavior; see the regression test below
/// before changing it.
///
/// Pure integer arithmetic; never fails. Callers guarantee `span.line >= 1`.
pub fn remap(anchor: Anchor, span: TemplateSpan) -> FileSpan {
    let line = span.line + anchor.line - 1;
    let end_line = span.end_line + anchor.line - 1;

    let (column, end_column) = if span.line == 1 {
        (span.column + anchor.column, span.end_column + anchor.column)
    } else {
        (span.column, span.end_column)
    };

    FileSpan {
        line,
        column,
        end_line,
        end_column,
    }
}
