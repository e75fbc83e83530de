use super::deck::{SlideDeck, SlideKind};
use crate::models::EventRecord;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use tracing::debug;

/// Presentation knobs read from the configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselOptions {
    pub slide_height: u32,
    pub transition_ms: u32,
    pub empty_message: String,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            slide_height: 300,
            transition_ms: 500,
            empty_message: "No upcoming events yet.".to_string(),
        }
    }
}

/// Render the carousel fragment for `events` (file order).
pub fn render_carousel(events: &[EventRecord], opts: &CarouselOptions) -> String {
    carousel_markup(events, opts).into_string()
}

pub fn carousel_markup(events: &[EventRecord], opts: &CarouselOptions) -> Markup {
    let deck = SlideDeck::build(events);

    if deck.is_empty() {
        debug!("no events, rendering empty carousel state");
        return empty_state(opts);
    }

    debug!(real = deck.real_count(), slides = deck.len(), "rendering carousel");

    html! {
        div.carousel style="width: 100%; overflow: hidden; position: relative;" {
            style { (PreEscaped(stylesheet(opts))) }
            div.carousel-container id="carousel-container" data-real-slides=(deck.real_count()) {
                @for slide in deck.slides() {
                    (slide_markup(&events[slide.event], slide.kind))
                }
            }
            div.carousel-buttons {
                button type="button" onclick="moveSlide(-1)" { "Previous" }
                button type="button" onclick="moveSlide(1)" { "Next" }
            }
            script { (PreEscaped(navigation_script(opts))) }
        }
    }
}

/// Wrap a fragment in a standalone document, for previewing in a browser.
pub fn render_page(fragment: &str, title: &str) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
            }
            body style="font-family: sans-serif; max-width: 720px; margin: 2em auto;" {
                (PreEscaped(fragment))
            }
        }
    }
    .into_string()
}

fn slide_markup(ev: &EventRecord, kind: SlideKind) -> Markup {
    let class = if kind.is_clone() {
        "carousel-slide carousel-clone"
    } else {
        "carousel-slide"
    };

    html! {
        div class=(class) aria-hidden=[kind.is_clone().then_some("true")] {
            h2 { (ev.title) }
            h4 style="color: yellow;" { (ev.source.badge()) }
            p { strong { "Date:" } " " (ev.date_str()) }
            p { strong { "Address:" } " " (ev.address) }
            p { (ev.description) }
        }
    }
}

fn empty_state(opts: &CarouselOptions) -> Markup {
    html! {
        div.carousel.carousel-empty style=(format!(
            "width: 100%; height: {}px; display: flex; align-items: center; \
             justify-content: center; border-radius: 15px; \
             background: linear-gradient(135deg, #00bac1, #011efe); color: white;",
            opts.slide_height
        )) {
            p { (opts.empty_message) }
        }
    }
}

fn stylesheet(opts: &CarouselOptions) -> String {
    format!(
        r#"
.carousel-container {{
    display: flex;
    transition: transform {ms}ms ease-in-out;
    width: 100%;
}}
.carousel-slide {{
    min-width: 100%;
    flex-shrink: 0;
    box-sizing: border-box;
    padding: 20px;
    text-align: center;
    background: linear-gradient(135deg, #00bac1, #011efe);
    border-radius: 15px;
    box-shadow: 0 4px 8px rgba(0, 0, 0, 0.2);
    color: white;
    height: {height}px;
    display: flex;
    flex-direction: column;
    justify-content: center;
    overflow: hidden;
    word-wrap: break-word;
}}
.carousel-buttons {{
    text-align: center;
    margin-top: 10px;
}}
.carousel-buttons button {{
    color: white;
    border: none;
    padding: 10px 20px;
    margin: 5px;
    border-radius: 5px;
    cursor: pointer;
    font-weight: bold;
}}
.carousel-buttons button:first-child {{
    background-color: #196415;
}}
.carousel-buttons button:last-child {{
    background-color: #f9af00;
}}
"#,
        ms = opts.transition_ms,
        height = opts.slide_height,
    )
}

/// Browser side of `CarouselState`: same phases, one `transitionend` listener.
fn navigation_script(opts: &CarouselOptions) -> String {
    format!(
        r#"
(function () {{
    const NORMAL = 0, SNAPPING_TO_START = 1, SNAPPING_TO_END = 2;
    const container = document.getElementById('carousel-container');
    const total = container.children.length;
    const realCount = total - 2;
    let index = 1;
    let phase = NORMAL;

    function show(animated) {{
        container.style.transition = animated ? 'transform {ms}ms ease-in-out' : 'none';
        container.style.transform = 'translateX(' + (-index * 100) + '%)';
    }}

    function settle() {{
        if (phase === SNAPPING_TO_START) {{
            index = 1;
        }} else if (phase === SNAPPING_TO_END) {{
            index = realCount;
        }} else {{
            return;
        }}
        phase = NORMAL;
        show(false);
        void container.offsetWidth;
    }}

    container.addEventListener('transitionend', settle);

    window.moveSlide = function (direction) {{
        settle();
        index += direction < 0 ? -1 : 1;
        if (index === total - 1) {{
            phase = SNAPPING_TO_START;
        }} else if (index === 0) {{
            phase = SNAPPING_TO_END;
        }} else {{
            phase = NORMAL;
        }}
        show(true);
    }};

    show(false);
}})();
"#,
        ms = opts.transition_ms,
    )
}
