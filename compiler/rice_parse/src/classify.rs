//! Line depth from leading tree-drawing glyphs.
//!
//! The dump draws its tree with `|`, `` ` `` and spaces, two glyphs per
//! level, followed by a `-` run before the node name:
//!
//! ```text
//! TranslationUnitDecl           depth 1
//! |-NamespaceDecl ... shapes    depth 1
//! | `-CXXRecordDecl ...         depth 2
//! |   |-FieldDecl ...           depth 3
//! ```
//!
//! The depth is the only structural signal the driver has.

use rice_cursor::Cursor;

#[inline]
fn is_indent_glyph(byte: u8) -> bool {
    matches!(byte, b'|' | b'`' | b' ')
}

/// Depth of the line starting at the cursor. The cursor is left unmoved.
pub(crate) fn line_depth(cursor: &mut Cursor<'_>) -> u32 {
    let start = cursor.mark();
    let mut glyphs: u32 = 0;
    while cursor.peek().is_some_and(is_indent_glyph) {
        cursor.consume();
        glyphs += 1;
    }
    cursor.reset(start);
    glyphs / 2 + 1
}

/// Step over the indentation glyphs of the current line.
pub(crate) fn skip_indentation(cursor: &mut Cursor<'_>) {
    while cursor.peek().is_some_and(is_indent_glyph) {
        cursor.consume();
    }
}
