/// Turns an embed url into markup
///
/// Adapters hold one of these and hand it their embed url, they never render
/// anything themselves.
pub trait EmbedRenderer: Send + Sync {
    fn render_video_embed_code(&self, embed_url: &str, width: u32, height: u32) -> String;
}

impl<F> EmbedRenderer for F
where
    F: Fn(&str, u32, u32) -> String + Send + Sync,
{
    fn render_video_embed_code(&self, embed_url: &str, width: u32, height: u32) -> String {
        (self)(embed_url, width, height)
    }
}

/// Renders a plain `<iframe>`
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultRenderer;

impl EmbedRenderer for DefaultRenderer {
    fn render_video_embed_code(&self, embed_url: &str, width: u32, height: u32) -> String {
        format!(
            r#"<iframe width="{}" height="{}" src="{}" frameborder="0" allowfullscreen></iframe>"#,
            width,
            height,
            escape_attr(embed_url)
        )
    }
}

fn escape_attr(input: &str) -> String {
    input.chars().fold(String::with_capacity(input.len()), |mut s, c| {
        match c {
            '&' => s.push_str("&amp;"),
            '"' => s.push_str("&quot;"),
            '<' => s.push_str("&lt;"),
            '>' => s.push_str("&gt;"),
            c => s.push(c),
        }
        s
    })
}
