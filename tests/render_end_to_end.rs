use doc2md::{
    Entity, EntityKind, Heading, HeadingError, RenderError, RenderOptions, class_to_md, doc_to_md,
    doc_to_md_with_sections, module_to_md, render_docstring,
};

fn entity(name: &str, kind: EntityKind, docstring: Option<&str>) -> Entity {
    Entity {
        name: name.to_string(),
        kind,
        docstring: docstring.map(str::to_string),
        signature: None,
        members: Vec::new(),
    }
}

#[test]
fn test_one_line_docstring_minimal_document() {
    // Title heading, one blank line, the body line, one trailing blank line.
    // No TOC section even though the TOC flag is on.
    let md = render_docstring("Adds two numbers.", "add", RenderOptions::default()).unwrap();
    assert_eq!(md, "# add\n\nAdds two numbers.\n");
}

#[test]
fn test_empty_docstring_renders_heading_only() {
    let md = render_docstring("", "empty", RenderOptions::default()).unwrap();
    assert!(md.starts_with("# empty\n"));
    assert!(md.trim_end_matches('\n').lines().count() <= 1);
}

#[test]
fn test_toc_follows_leading_prose() {
    let md = render_docstring(
        "Intro.\n\n:param x: an int\n\n## Details\n\nMore.",
        "thing",
        RenderOptions::default(),
    )
    .unwrap();
    let lines: Vec<&str> = md.split('\n').collect();
    assert_eq!(lines[0], "## thing");
    assert_eq!(lines[2], "Intro.");
    assert_eq!(lines[4], "- [Details](#details)");
    assert!(lines[5].starts_with("- x: an [int]("));
    assert!(md.contains("\n## Details\n"));
}

#[test]
fn test_no_shift_when_sections_at_or_above_minimum() {
    let md = render_docstring(
        ":param x: v\n\n## A\n\n### B",
        "T",
        RenderOptions::new().min_level(1),
    )
    .unwrap();
    assert!(md.contains("\n## A\n"));
    assert!(md.contains("\n### B\n"));
}

#[test]
fn test_shift_applies_to_sections_and_body_headings() {
    let md = render_docstring(
        ":return: done\n\n## A\n\n### B",
        "T",
        RenderOptions::new().min_level(3),
    )
    .unwrap();
    let expected = [
        "### T",
        "",
        "- [A](#a)",
        "    - [B](#b)",
        "",
        "- return: done",
        "",
        "### A",
        "",
        "#### B",
        "",
    ]
    .join("\n");
    assert_eq!(md, expected);
}

#[test]
fn test_top_level_section_is_fatal() {
    let err = render_docstring("# Top\n\nBody", "T", RenderOptions::default()).unwrap_err();
    assert_eq!(
        err,
        RenderError::Heading(HeadingError::TopLevelSection("# Top".to_string()))
    );
}

#[test]
fn test_function_title_uses_recovered_signature() {
    let mut func = entity("add", EntityKind::Function, Some("Add."));
    func.signature = Some("add(a, b)".to_string());
    let md = doc_to_md(&func, RenderOptions::default()).unwrap();
    assert_eq!(md, "# add(a, b)\n\nAdd.\n");
}

#[test]
fn test_method_title_falls_back_to_name() {
    let method = entity("run", EntityKind::Method, Some("Run it."));
    let md = doc_to_md(&method, RenderOptions::default()).unwrap();
    assert_eq!(md, "# run\n\nRun it.\n");
}

#[test]
fn test_private_name_is_escaped() {
    let func = entity("_helper", EntityKind::Function, Some("Private."));
    let md = doc_to_md(&func, RenderOptions::default()).unwrap();
    assert!(md.starts_with("# \\_helper\n"));
}

#[test]
fn test_doc_to_md_rejects_module_kind() {
    let module = entity("m", EntityKind::Module, Some("Doc."));
    let err = doc_to_md(&module, RenderOptions::default()).unwrap_err();
    assert_eq!(err, RenderError::UnsupportedKind(EntityKind::Module));
}

#[test]
fn test_class_renders_one_level_deeper_with_ctor_signature() {
    let mut class = entity("Point", EntityKind::Class, Some("A 2-D point."));
    class.signature = Some("(x, y)".to_string());
    let (md, sections) = class_to_md(&class, RenderOptions::default()).unwrap();
    assert_eq!(md[0], "## Point(x, y)");
    assert!(sections.is_empty());
}

#[test]
fn test_class_members_render_two_levels_deeper_in_order() {
    let mut translate = entity("translate", EntityKind::Method, Some("Move the point."));
    translate.signature = Some("translate(dx, dy)".to_string());
    let scale = entity("scale", EntityKind::Method, Some("Scale the point."));
    let dunder = entity("__repr__", EntityKind::Method, Some("Repr."));

    let mut class = entity("Point", EntityKind::Class, Some("A 2-D point."));
    class.members = vec![translate, dunder, scale];

    let (md, _) = class_to_md(&class, RenderOptions::default()).unwrap();
    let joined = md.join("\n");
    let translate_at = joined.find("### translate(dx, dy)").unwrap();
    let scale_at = joined.find("### scale").unwrap();
    assert!(translate_at < scale_at);
    assert!(!joined.contains("__repr__"));
}

#[test]
fn test_class_accumulates_member_sections() {
    let method = entity(
        "run",
        EntityKind::Method,
        Some("Run.\n\n## Notes\n\nDetails."),
    );
    let mut class = entity("Job", EntityKind::Class, Some("A job."));
    class.members = vec![method];

    let (_, sections) = class_to_md(&class, RenderOptions::default()).unwrap();
    // Member sections are shifted up to the member's minimum level (1+2).
    assert_eq!(sections, vec![Heading::new(3, "Notes")]);
}

#[test]
fn test_more_info_mode_returns_shifted_sections() {
    let func = entity("f", EntityKind::Function, Some("Doc.\n\n## Sec\n\nBody."));
    let (_, sections) =
        doc_to_md_with_sections(&func, RenderOptions::new().min_level(4)).unwrap();
    assert_eq!(sections, vec![Heading::new(4, "Sec")]);
}

fn sample_module() -> Entity {
    let mut point = entity("Point", EntityKind::Class, Some("A 2-D point."));
    point.signature = Some("(x, y)".to_string());

    let mut add = entity("add", EntityKind::Function, Some("Add two values."));
    add.signature = Some("add(a, b)".to_string());

    let undocumented = entity("undoc", EntityKind::Function, None);

    let mut module = entity(
        "mymod",
        EntityKind::Module,
        Some("Top line.\n\n## Usage\n\nUse it."),
    );
    module.members = vec![point, add, undocumented];
    module
}

#[test]
fn test_module_full_listing() {
    let md = module_to_md(&sample_module(), "mymod", RenderOptions::default()).unwrap();
    assert!(md.starts_with("# mymod\n\nTop line.\n"));
    assert!(md.contains("- [Usage](#usage)"));
    assert!(md.contains("- [Class](#class)"));
    assert!(md.contains("- [Functions](#functions)"));
    assert!(md.contains("    - [add](#add)"));
    assert!(md.contains("\n# Class\n"));
    assert!(md.contains("\n## Point(x, y)\n"));
    assert!(md.contains("\n# Functions\n"));
    assert!(md.contains("\n### add(a, b)\n"));
    assert!(!md.contains("undoc"));
}

#[test]
fn test_module_listing_without_toc() {
    let md = module_to_md(&sample_module(), "mymod", RenderOptions::new().toc(false)).unwrap();
    assert!(!md.contains("](#"));
    assert!(md.contains("\n# Functions\n"));
}

#[test]
fn test_module_to_md_rejects_non_module() {
    let func = entity("f", EntityKind::Function, Some("Doc."));
    let err = module_to_md(&func, "f", RenderOptions::default()).unwrap_err();
    assert_eq!(err, RenderError::UnsupportedKind(EntityKind::Function));
}
