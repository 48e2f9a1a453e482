//! Built-in renderers, one per declared block type.

use crate::fragment::Fragment;
use crate::registry::{BlockRenderer, RendererRegistry};
use blockpress_blocks::{Block, CalloutKind, ListItemKind, RichStyle, Span};

pub(crate) fn register_defaults(registry: &mut RendererRegistry) {
    registry.register("h1", Box::new(HeadingRenderer { level: 1 }));
    registry.register("h2", Box::new(HeadingRenderer { level: 2 }));
    registry.register("paragraph", Box::new(ParagraphRenderer));
    registry.register("text", Box::new(ParagraphRenderer));
    registry.register("bulletList", Box::new(ListRenderer { ordered: false }));
    registry.register("numberList", Box::new(ListRenderer { ordered: true }));
    registry.register("code", Box::new(CodeRenderer));
    registry.register("image", Box::new(ImageRenderer));
    registry.register("block", Box::new(RichTextRenderer));
    registry.register("calloutBlock", Box::new(CalloutRenderer));
    registry.register("pullQuoteBlock", Box::new(PullQuoteRenderer));
    registry.register("featureImageBlock", Box::new(FeatureImageRenderer));
}

#[derive(Debug)]
struct HeadingRenderer {
    level: u8,
}

impl BlockRenderer for HeadingRenderer {
    fn render(&self, block: &Block) -> Fragment {
        match block {
            Block::H1 { content, .. } | Block::H2 { content, .. } => {
                Fragment::element(format!("h{}", self.level)).with_child(Fragment::text(content))
            }
            other => Fragment::missing(other.type_tag()),
        }
    }
}

#[derive(Debug)]
struct ParagraphRenderer;

impl BlockRenderer for ParagraphRenderer {
    fn render(&self, block: &Block) -> Fragment {
        match block {
            Block::Paragraph { content, .. } | Block::Text { content, .. } => {
                Fragment::element("p").with_child(Fragment::text(content))
            }
            other => Fragment::missing(other.type_tag()),
        }
    }
}

#[derive(Debug)]
struct ListRenderer {
    ordered: bool,
}

impl BlockRenderer for ListRenderer {
    fn render(&self, block: &Block) -> Fragment {
        let items = match block {
            Block::BulletList { items, .. } | Block::NumberList { items, .. } => items,
            other => return Fragment::missing(other.type_tag()),
        };

        let tag = if self.ordered { "ol" } else { "ul" };
        Fragment::element(tag).with_children(
            items
                .iter()
                .map(|item| Fragment::element("li").with_child(Fragment::text(item)))
                .collect(),
        )
    }
}

#[derive(Debug)]
struct CodeRenderer;

impl BlockRenderer for CodeRenderer {
    fn render(&self, block: &Block) -> Fragment {
        match block {
            Block::Code { code, language, .. } => Fragment::element("pre").with_child(
                Fragment::element("code")
                    .with_attr("class", format!("language-{language}"))
                    .with_child(Fragment::text(code)),
            ),
            other => Fragment::missing(other.type_tag()),
        }
    }
}

#[derive(Debug)]
struct ImageRenderer;

impl BlockRenderer for ImageRenderer {
    fn render(&self, block: &Block) -> Fragment {
        match block {
            Block::Image { image: Some(asset), .. } => {
                Fragment::element("img").with_attr("src", &asset.url)
            }
            // Empty state: the block exists but nothing was uploaded yet.
            Block::Image { image: None, .. } => Fragment::element("div")
                .with_attr("class", "image-placeholder")
                .with_child(Fragment::text("No image selected")),
            other => Fragment::missing(other.type_tag()),
        }
    }
}

#[derive(Debug)]
struct RichTextRenderer;

impl RichTextRenderer {
    fn span_fragment(span: &Span) -> Fragment {
        // Wrap the text once per mark, innermost first.
        let mut fragment = Fragment::text(&span.text);
        for mark in &span.marks {
            let tag = match mark.as_str() {
                "strong" => "strong",
                "em" => "em",
                "code" => "code",
                "strike" => "s",
                "underline" => "u",
                _ => continue,
            };
            fragment = Fragment::element(tag).with_child(fragment);
        }
        fragment
    }
}

impl BlockRenderer for RichTextRenderer {
    fn render(&self, block: &Block) -> Fragment {
        let Block::Rich { style, children, list_item, .. } = block else {
            return Fragment::missing(block.type_tag());
        };

        // List items render as `li`; consumers group adjacent ones into
        // a surrounding list element.
        let tag = match list_item {
            Some(ListItemKind::Bullet) | Some(ListItemKind::Number) => "li",
            None => match style {
                RichStyle::H1 => "h1",
                RichStyle::H2 => "h2",
                RichStyle::H3 => "h3",
                RichStyle::Normal => "p",
                RichStyle::Blockquote => "blockquote",
            },
        };

        Fragment::element(tag)
            .with_children(children.iter().map(Self::span_fragment).collect())
    }
}

#[derive(Debug)]
struct CalloutRenderer;

impl BlockRenderer for CalloutRenderer {
    fn render(&self, block: &Block) -> Fragment {
        match block {
            Block::Callout { kind, title, content, .. } => {
                let class = match kind {
                    CalloutKind::Info => "callout callout-info",
                    CalloutKind::Warning => "callout callout-warning",
                    CalloutKind::Error => "callout callout-error",
                };
                Fragment::element("aside")
                    .with_attr("class", class)
                    .with_child(Fragment::element("strong").with_child(Fragment::text(title)))
                    .with_child(Fragment::element("p").with_child(Fragment::text(content)))
            }
            other => Fragment::missing(other.type_tag()),
        }
    }
}

#[derive(Debug)]
struct PullQuoteRenderer;

impl BlockRenderer for PullQuoteRenderer {
    fn render(&self, block: &Block) -> Fragment {
        match block {
            Block::PullQuote { quote, author, .. } => Fragment::element("figure")
                .with_attr("class", "pull-quote")
                .with_child(Fragment::element("blockquote").with_child(Fragment::text(quote)))
                .with_child(Fragment::element("figcaption").with_child(Fragment::text(author))),
            other => Fragment::missing(other.type_tag()),
        }
    }
}

#[derive(Debug)]
struct FeatureImageRenderer;

impl BlockRenderer for FeatureImageRenderer {
    fn render(&self, block: &Block) -> Fragment {
        match block {
            Block::FeatureImage { image_url, alt, caption, full_width, .. } => {
                let class = if *full_width {
                    "feature-image feature-image-full"
                } else {
                    "feature-image"
                };
                Fragment::element("figure")
                    .with_attr("class", class)
                    .with_child(
                        Fragment::element("img")
                            .with_attr("src", image_url)
                            .with_attr("alt", alt),
                    )
                    .with_child(
                        Fragment::element("figcaption").with_child(Fragment::text(caption)),
                    )
            }
            other => Fragment::missing(other.type_tag()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockpress_blocks::ImageAsset;

    fn registry() -> RendererRegistry {
        RendererRegistry::with_defaults()
    }

    #[test]
    fn test_heading_and_paragraph() {
        let h1 = registry().render(&Block::H1 {
            key: "a".to_string(),
            content: "Welcome".to_string(),
        });
        match &h1 {
            Fragment::Element { tag, .. } => assert_eq!(tag, "h1"),
            other => panic!("expected element, got {other:?}"),
        }
        assert_eq!(h1.plain_text(), "Welcome");

        let p = registry().render(&Block::Text {
            key: "b".to_string(),
            content: "Body copy".to_string(),
        });
        match &p {
            Fragment::Element { tag, .. } => assert_eq!(tag, "p"),
            other => panic!("expected element, got {other:?}"),
        }
    }

    #[test]
    fn test_list_renders_items_in_order() {
        let fragment = registry().render(&Block::NumberList {
            key: "a".to_string(),
            items: vec!["first".to_string(), "second".to_string()],
        });

        match &fragment {
            Fragment::Element { tag, children, .. } => {
                assert_eq!(tag, "ol");
                assert_eq!(children.len(), 2);
                assert_eq!(children[0].plain_text(), "first");
                assert_eq!(children[1].plain_text(), "second");
            }
            other => panic!("expected element, got {other:?}"),
        }
    }

    #[test]
    fn test_code_carries_language_class() {
        let fragment = registry().render(&Block::Code {
            key: "a".to_string(),
            code: "let x = 1;".to_string(),
            language: "rust".to_string(),
        });

        match &fragment {
            Fragment::Element { tag, children, .. } => {
                assert_eq!(tag, "pre");
                assert_eq!(children[0].attr("class"), Some("language-rust"));
            }
            other => panic!("expected element, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_image_renders_placeholder() {
        let fragment = registry().render(&Block::Image { key: "a".to_string(), image: None });
        assert_eq!(fragment.attr("class"), Some("image-placeholder"));

        let fragment = registry().render(&Block::Image {
            key: "a".to_string(),
            image: Some(ImageAsset::new("https://cdn/x.png")),
        });
        assert_eq!(fragment.attr("src"), Some("https://cdn/x.png"));
    }

    #[test]
    fn test_rich_marks_become_inline_wrappers() {
        let fragment = registry().render(&Block::Rich {
            key: "a".to_string(),
            style: RichStyle::Normal,
            children: vec![Span::text("plain "), Span::marked("loud", "strong")],
            list_item: None,
            level: None,
        });

        match &fragment {
            Fragment::Element { tag, children, .. } => {
                assert_eq!(tag, "p");
                assert_eq!(children[0], Fragment::text("plain "));
                assert_eq!(
                    children[1],
                    Fragment::element("strong").with_child(Fragment::text("loud"))
                );
            }
            other => panic!("expected element, got {other:?}"),
        }
    }

    #[test]
    fn test_rich_list_item_renders_li() {
        let fragment = registry().render(&Block::Rich {
            key: "a".to_string(),
            style: RichStyle::Normal,
            children: vec![Span::text("item")],
            list_item: Some(ListItemKind::Bullet),
            level: Some(1),
        });

        match &fragment {
            Fragment::Element { tag, .. } => assert_eq!(tag, "li"),
            other => panic!("expected element, got {other:?}"),
        }
    }

    #[test]
    fn test_callout_kind_drives_class() {
        let fragment = registry().render(&Block::Callout {
            key: "a".to_string(),
            kind: CalloutKind::Error,
            title: "Oops".to_string(),
            content: "Something broke".to_string(),
        });

        assert_eq!(fragment.attr("class"), Some("callout callout-error"));
        assert_eq!(fragment.plain_text(), "OopsSomething broke");
    }

    #[test]
    fn test_feature_image_full_width_class() {
        let full = registry().render(&Block::FeatureImage {
            key: "a".to_string(),
            image_url: "https://cdn/hero.png".to_string(),
            alt: "hero".to_string(),
            caption: "The team".to_string(),
            full_width: true,
        });
        assert_eq!(full.attr("class"), Some("feature-image feature-image-full"));

        let inset = registry().render(&Block::FeatureImage {
            key: "a".to_string(),
            image_url: "https://cdn/hero.png".to_string(),
            alt: "hero".to_string(),
            caption: "The team".to_string(),
            full_width: false,
        });
        assert_eq!(inset.attr("class"), Some("feature-image"));
    }
}
