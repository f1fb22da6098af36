use tera::Tera;

/// Build the template set from the documents embedded in the binary.
///
/// Parsed once at startup; a malformed embedded template is a packaging
/// defect and fails the process before it starts serving.
pub fn build() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("index.html", include_str!("../../templates/index.html")),
        (
            "list-repositories.html",
            include_str!("../../templates/list-repositories.html"),
        ),
        (
            "list-repository-tags.html",
            include_str!("../../templates/list-repository-tags.html"),
        ),
        (
            "show-repository-tag-details.html",
            include_str!("../../templates/show-repository-tag-details.html"),
        ),
        ("404.html", include_str!("../../templates/404.html")),
    ])?;
    Ok(tera)
}
