use rs_readability::{summarize, summarize_with_options, Document, Options};

fn prose(sentences: usize) -> String {
    "The council met on Tuesday, heard from residents, and voted on the plan. ".repeat(sentences)
}

fn partial() -> Options {
    Options {
        html_partial: true,
        ..Options::default()
    }
}

#[test]
fn minimal_paragraph_is_extracted() {
    let html = "<html><body><div><p>AAAAAAAAAAAAAAAAAAAAAAAAA</p></div></body></html>";
    let summary = summarize(html).expect("summary");

    assert!(summary.html.contains("AAAAAAAAAAAAAAAAAAAAAAAAA"));
    assert!(summary.confidence > 0.0);
}

#[test]
fn paragraph_directly_in_body_is_extracted() {
    let html = "<html><body><p>AAAAAAAAAAAAAAAAAAAAAAAAA</p></body></html>";
    let summary = summarize(html).expect("summary");

    assert!(summary.html.contains("AAAAAAAAAAAAAAAAAAAAAAAAA"));
}

#[test]
fn comments_and_ads_are_cleaned_up() {
    let html = format!(
        r#"<html><body>
        <section>test section</section>
        <article class="">
            <p>Lot of text here.</p>
            <div id="advertisement"><a href="link">Ad</a></div>
            <p>More text is written here, and contains punctuation and dots.</p>
            <p>{long}</p>
            <p>{long}</p>
        </article>
        <aside id="comment1"></aside>
        <div id="comment2">
            <a href="asd">spam</a>
            <a href="asd">spam</a>
            <a href="asd">spam</a>
        </div>
        <aside id="comment4">A small comment.</aside>
        <div id="comment5"><p>The comment is also helpful, but it's
            still not the correct item to be extracted.</p></div>
        </body></html>"#,
        long = prose(3)
    );
    let summary = summarize(&html).expect("summary");

    assert!(summary.html.contains("punctuation"));
    assert!(!summary.html.contains("comment"));
    assert!(!summary.html.contains("aside"));
    assert!(!summary.html.contains("advertisement"));
}

#[test]
fn full_document_wraps_article_in_html_body() {
    let html = format!(
        r#"<html><body><div class="post-body"><p>{p}</p><p>{p}</p></div></body></html>"#,
        p = prose(3)
    );
    let summary = summarize(&html).expect("summary");

    assert!(summary.html.starts_with("<html><body><div><div class"));
    assert!(summary.html.ends_with("</div></body></html>"));
}

#[test]
fn partial_output_is_a_bare_div() {
    let html = format!(
        r#"<html><body><ul><li><a href="/">Home</a></li></ul>
        <div class="post-body"><p>{p}</p><p>{p}</p></div></body></html>"#,
        p = prose(3)
    );
    let summary = summarize_with_options(&html, &partial()).expect("summary");

    assert!(summary.html.starts_with(r#"<div><div class="post-body"#));
    assert!(!summary.html.contains("<body"));
    assert!(!summary.html.contains("Home"));
}

#[test]
fn best_candidate_may_be_the_root_element() {
    let html = r#"<html class="article" id="body">
        <body>
            <p>1234567890123456789012345</p>
        </body>
    </html>"#;
    let summary = summarize(html).expect("summary");

    assert!(summary.html.contains("1234567890123456789012345"));
}

#[test]
fn cjk_article_is_extracted() {
    let html = r#"
    <html>
        <head>
            <title>这是标题</title>
        </head>
        <body>
            <div>一些无关紧要的内容</div>
            <div class="article-content">
                <h1>主要文章标题</h1>
                <p>这是主要内容的第一段。</p>
                <p>これはコンテンツの第2段落です。</p>
                <p>이것은 콘텐츠의 세 번째 단락입니다.</p>
                <p>This is the fourth paragraph.</p>
            </div>
            <div>More irrelevant stuff</div>
        </body>
    </html>"#;
    let summary = summarize(html).expect("summary");

    assert!(summary.html.contains("这是主要内容的第一段"));
    assert!(summary.html.contains("これはコンテンツの第2段落です"));
    assert!(summary.html.contains("이것은 콘텐츠의 세 번째 단락입니다"));
    assert!(!summary.html.contains("一些无关紧要的内容"));
    assert!(!summary.html.contains("More irrelevant stuff"));
    assert_eq!(summary.title, "这是标题");
}

#[test]
fn sentence_sibling_is_merged_and_nav_is_not() {
    let html = format!(
        r#"<html><body>
        <div class="story"><p>{p}</p><p>{p}</p></div>
        <p>Short closing line.</p>
        <p>no sentence here</p>
        <ul class="links"><li><a href="/a">Elsewhere</a></li></ul>
        </body></html>"#,
        p = prose(3)
    );
    let summary = summarize_with_options(&html, &partial()).expect("summary");

    assert!(summary.html.contains("Short closing line."));
    assert!(!summary.html.contains("no sentence here"));
    assert!(!summary.html.contains("Elsewhere"));
}

fn gallery_page() -> String {
    format!(
        r#"<html><body><div class="post-body">
        <p>{p}</p>
        <figure><img src="a.jpg"><img src="b.jpg"><img src="c.jpg"></figure>
        <p>{p}</p>
        <p>{p}</p>
        </div></body></html>"#,
        p = prose(3)
    )
}

#[test]
fn only_first_figure_image_is_kept_by_default() {
    let summary = summarize(&gallery_page()).expect("summary");

    assert_eq!(summary.html.matches("<img").count(), 1);
    assert!(summary.html.contains("a.jpg"));
    assert!(!summary.html.contains("b.jpg"));
}

#[test]
fn keep_all_images_retains_every_image() {
    let options = Options {
        keep_all_images: true,
        ..Options::default()
    };
    let summary = summarize_with_options(&gallery_page(), &options).expect("summary");

    assert_eq!(summary.html.matches("<img").count(), 3);
}

#[test]
fn base_href_and_url_make_links_absolute() {
    let html = format!(
        r#"<html><head><base href="/archive/"></head><body>
        <div class="post-body"><p>{p} <a href="next.html">next</a></p><p>{p}</p>
        <p>{p}<img src="/img/map.png"></p></div></body></html>"#,
        p = prose(3)
    );
    let options = Options {
        url: Some("https://news.example.com/2024/story.html".to_string()),
        html_partial: true,
        ..Options::default()
    };
    let summary = summarize_with_options(&html, &options).expect("summary");

    assert!(summary.html.contains("https://news.example.com/archive/next.html"));
    assert!(summary.html.contains("https://news.example.com/img/map.png"));
}

#[test]
fn summaries_are_repeatable() {
    let doc = Document::new(&gallery_page(), Options::default()).expect("document");

    let first = doc.summary_with_metadata().expect("first");
    let second = doc.summary_with_metadata().expect("second");
    assert_eq!(first, second);
}

#[test]
fn output_keeps_class_and_id_but_drops_presentation() {
    let html = format!(
        r#"<html><body><div class="post-body" id="main" style="color:red">
        <p align="center" onclick="track()">{p}</p><p>{p}</p></div></body></html>"#,
        p = prose(3)
    );
    let summary = summarize_with_options(&html, &partial()).expect("summary");

    assert!(summary.html.contains(r#"class="post-body""#));
    assert!(summary.html.contains(r#"id="main""#));
    assert!(!summary.html.contains("style="));
    assert!(!summary.html.contains("onclick"));
    assert!(!summary.html.contains("align="));
}
