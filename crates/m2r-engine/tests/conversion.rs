use m2r_engine::{ConvertError, Options, PROLOG, TableMode, convert, convert_file};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn fixture_readme() {
    assert_fixture("readme");
}

#[test]
fn fixture_footnotes() {
    assert_fixture("footnotes");
}

#[test]
fn fixture_rest_passthrough() {
    assert_fixture("rest_passthrough");
}

fn assert_fixture(name: &str) {
    let dir = format!("{}/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{dir}/{name}.md")).unwrap();
    let rst = std::fs::read_to_string(format!("{dir}/{name}.rst")).unwrap();

    assert_eq!(convert(&md, &Options::default()).unwrap(), rst);
}

fn conv(src: &str) -> String {
    convert(src, &Options::default()).unwrap()
}

#[rstest]
#[case::paragraph("this is a sentence.\n", "\nthis is a sentence.\n")]
#[case::strong("**a**", "\n**a**\n")]
#[case::underscore_strong("__a__", "\n**a**\n")]
#[case::url("link to http://example.com/ in sentence.", "\nlink to http://example.com/ in sentence.\n")]
#[case::link(
    "this is a [link](http://example.com/).",
    "\nthis is a `link <http://example.com/>`_.\n"
)]
#[case::image_link(
    "[![Alt Text](image_taget_url)](link_target_url)",
    "\n\n.. image:: image_taget_url\n   :target: link_target_url\n   :alt: Alt Text\n\n"
)]
#[case::image(
    "![alt text](a.png)",
    "\n\n.. image:: a.png\n   :target: a.png\n   :alt: alt text\n\n"
)]
#[case::inline_math(
    "this is `$E = mc^2$` inline math.",
    "\nthis is :math:`E = mc^2` inline math.\n"
)]
#[case::image_in_sentence(
    "see ![a](b.png) here",
    "\nsee\n\n.. image:: b.png\n   :target: b.png\n   :alt: a\n\nhere\n"
)]
#[case::code_spans_holding_dollars("`$HOME` costs `5$`", "\n``$HOME`` costs ``5$``\n")]
#[case::code_span_before_math("`5$` and `$x$`", "\n``5$`` and :math:`x`\n")]
#[case::empty_math("`$$`", "\n``$$``\n")]
#[case::block_html("<h1>title</h1>", "\n\n.. raw:: html\n\n   <h1>title</h1>\n\n")]
#[case::multibyte_heading("# マルチバイト文字\n", "\nマルチバイト文字\n================\n")]
fn markdown_constructs(#[case] src: &str, #[case] expected: &str) {
    assert_eq!(conv(src), expected);
}

#[rstest]
#[case::prefix_role("a :code:`some code` inline.")]
#[case::suffix_role("a `some code`:code: inline.")]
#[case::rest_link("a `RefLink <http://example.com>`_ here.")]
#[case::role_and_link("a :code:`a` and `RefLink <http://example.com>`_ here.")]
#[case::suffix_role_and_link("a `a`:code: and `RefLink <http://example.com>`_ here.")]
fn rest_markup_passes_through(#[case] src: &str) {
    assert_eq!(conv(src), format!("\n{src}\n"));
}

#[rstest]
#[case::incomplete_role(
    "a co:`de` and `RefLink <http://example.com>`_ here.",
    "\na co:\\ ``de`` and `RefLink <http://example.com>`_ here.\n"
)]
#[case::incomplete_role_after_link(
    "a `RefLink <http://example.com>`_ and co:`de` here.",
    "\na `RefLink <http://example.com>`_ and co:\\ ``de`` here.\n"
)]
#[case::code_then_role("a `code` and :code:`rest` here.", "\na ``code`` and :code:`rest` here.\n")]
#[case::code_then_suffix_role(
    "a `code` and `rest`:code: here.",
    "\na ``code`` and `rest`:code: here.\n"
)]
#[case::role_then_code("a :code:`rest` and `code` here.", "\na :code:`rest` and ``code`` here.\n")]
#[case::link_then_code("a `RefLink <a>`_ and `code` here.", "\na `RefLink <a>`_ and ``code`` here.\n")]
#[case::code_then_link("a `code` and `RefLink <a>`_ here.", "\na ``code`` and `RefLink <a>`_ here.\n")]
fn code_spans_next_to_rest_markup(#[case] src: &str, #[case] expected: &str) {
    assert_eq!(conv(src), expected);
}

#[rstest]
#[case::line_break("abc def  \nghi", "\nabc def\\ :raw-html-m2r:`<br>`\nghi\n")]
#[case::inline_html("this is <s>html</s>.", "\nthis is :raw-html-m2r:`<s>html</s>`.\n")]
#[case::link_title(
    "this is a [link](http://example.com/ \"example\").",
    "\nthis is a :raw-html-m2r:`<a href=\"http://example.com/\" title=\"example\">link</a>`.\n"
)]
fn raw_html_output_gets_the_prolog(#[case] src: &str, #[case] body: &str) {
    assert_eq!(conv(src), format!("{PROLOG}{body}"));
}

#[rstest]
#[case::ul(
    "* list 1\n* list 2\n  * list 2.1\n  * list 2.2\n* list 3",
    "\n\n* list 1\n* list 2\n\n  * list 2.1\n  * list 2.2\n\n* list 3\n"
)]
#[case::ol(
    "1. list 1\n2. list 2\n  2. list 2.1\n  3. list 2.2\n3. list 3",
    "\n\n#. list 1\n#. list 2\n\n   #. list 2.1\n   #. list 2.2\n\n#. list 3\n"
)]
#[case::mixed(
    "1. list 1\n2. list 2\n  * list 2.1\n  * list 2.2\n    1. list 2.2.1\n    2. list 2.2.2\n7. list 3",
    "\n\n#. list 1\n#. list 2\n\n   * list 2.1\n   * list 2.2\n\n     #. list 2.2.1\n     #. list 2.2.2\n\n#. list 3\n"
)]
#[case::multiline(
    "1. list 1\n  list 1 cont\n1. list 2\n  list 2 cont\n  * list 2.1\n    list 2.1 cont\n  * list 2.2\n    list 2.2 cont\n    1. list 2.2.1\n    1. list 2.2.2\n1. list 3",
    "\n\n#. list 1\n   list 1 cont\n#. list 2\n   list 2 cont\n\n   * list 2.1\n     list 2.1 cont\n   * list 2.2\n     list 2.2 cont\n\n     #. list 2.2.1\n     #. list 2.2.2\n\n#. list 3\n"
)]
fn nested_lists(#[case] src: &str, #[case] expected: &str) {
    assert_eq!(conv(src), expected);
}

#[test]
fn pipeless_table() {
    assert_eq!(
        conv("h1 | h2 | h3\n--- | --- | ---\n1 | 2 | 3\n4 | 5 | 6"),
        [
            "",
            ".. list-table::",
            "   :header-rows: 1",
            "",
            "   * - h1",
            "     - h2",
            "     - h3",
            "   * - 1",
            "     - 2",
            "     - 3",
            "   * - 4",
            "     - 5",
            "     - 6",
            "",
            "",
        ]
        .join("\n")
    );
}

#[test]
fn raw_html_table_mode() {
    let options = Options {
        table_mode: TableMode::RawHtml,
        ..Options::default()
    };
    let out = convert("a | b\n--|--\n1 | 2", &options).unwrap();
    assert!(out.starts_with("\n\n.. raw:: html\n\n   <table>\n"), "{out}");
    assert!(!out.starts_with(PROLOG));
}

#[rstest]
#[case::one_line(".. a", "\n.. a")]
#[case::indented("    .. a", "\n    .. a")]
#[case::sphinx_ref(
    "This is a sphinx [ref]_ global ref.\n\n.. [ref] ref text",
    "\nThis is a sphinx [ref]_ global ref.\n\n.. [ref] ref text"
)]
#[case::comment_then_paragraph("..\n\n   comment\n\nnewline", "\n..\n\n   comment\n\nnewline\n")]
#[case::multiline_comment(
    ".. this is comment.\n   this is also comment.\n\n\n    comment may include empty line.\n\n\n`eoc`",
    "\n.. this is comment.\n   this is also comment.\n\n\n    comment may include empty line.\n\n\n``eoc``\n"
)]
fn directives_and_comments(#[case] src: &str, #[case] expected: &str) {
    assert_eq!(conv(src), expected);
}

#[rstest]
#[case::empty("\n\n::\n\n", "\n\n")]
#[case::keeps_colon("a::\n\n    code\n", "\na:\n\n.. code-block::\n\n   code\n")]
#[case::drops_spaced_marker("a ::\n\n    code\n", "\na\n\n.. code-block::\n\n   code\n")]
fn literal_block_markers(#[case] src: &str, #[case] expected: &str) {
    assert_eq!(conv(src), expected);
}

#[rstest]
#[case::no_underscore_emphasis(
    Options { no_underscore_emphasis: true, ..Options::default() },
    "__a__",
    "\n__a__\n"
)]
#[case::anonymous_references(
    Options { anonymous_references: true, ..Options::default() },
    "this is a [link](http://example.com/).",
    "\nthis is a `link <http://example.com/>`__.\n"
)]
#[case::disable_inline_math(
    Options { disable_inline_math: true, ..Options::default() },
    "this is `$E = mc^2$` inline math.",
    "\nthis is ``$E = mc^2$`` inline math.\n"
)]
#[case::relative_anchor(
    Options { parse_relative_links: true, ..Options::default() },
    "this is an [anchor](#anchor).",
    "\nthis is an :ref:`anchor <anchor>`.\n"
)]
#[case::relative_doc(
    Options { parse_relative_links: true, ..Options::default() },
    "this is a [relative link](a_file.md#anchor).",
    "\nthis is a :doc:`relative link <a_file>`.\n"
)]
#[case::absolute_link_with_relative_links_enabled(
    Options { parse_relative_links: true, anonymous_references: true, ..Options::default() },
    "this is a [link](http://example.com/).",
    "\nthis is a `link <http://example.com/>`__.\n"
)]
fn options_change_output(#[case] options: Options, #[case] src: &str, #[case] expected: &str) {
    assert_eq!(convert(src, &options).unwrap(), expected);
}

#[test]
fn converts_a_file_from_disk() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("notes.md");
    std::fs::write(&path, "Some **bold** text.\n").unwrap();

    let out = convert_file(&path, &Options::default()).unwrap();

    assert_eq!(out, "\nSome **bold** text.\n");
}

#[test]
fn missing_file_reports_its_path() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("missing.md");

    let err = convert_file(&path, &Options::default()).unwrap_err();

    assert!(matches!(&err, ConvertError::NotFound(p) if p == &path));
    assert!(err.to_string().contains("missing.md"), "{err}");
}

#[test]
fn many_paragraphs_convert_in_one_pass() {
    let n = 20_000;
    let src = "para text here\n\n".repeat(n);

    let out = conv(&src);

    assert_eq!(out, "\npara text here\n".repeat(n));
}

#[test]
fn many_short_lists_convert_in_one_pass() {
    let n = 5_000;
    let src = "* item\n\ntext\n\n".repeat(n);

    let out = conv(&src);

    assert_eq!(out.matches("* item\n").count(), n);
    assert_eq!(out.matches("\ntext\n").count(), n);
}
