/// Content of the portfolio lightbox for one item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalContent {
    pub image_src: String,
    /// 1-based position of the item on the page.
    pub ordinal: usize,
}

pub const MODAL_DESCRIPTION: &str = "E-Commerce website design template showcasing modern furniture layouts and user experience.";

impl ModalContent {
    pub fn new(image_src: impl Into<String>, ordinal: usize) -> Self {
        Self {
            image_src: image_src.into(),
            ordinal,
        }
    }

    pub fn title(&self) -> String {
        format!("Funiro Landing Page Design {}", self.ordinal)
    }

    /// Inner markup of the `.portfolio-modal` container.
    pub fn markup(&self) -> String {
        let title = escape_html(&self.title());
        format!(
            "<div class=\"modal-overlay\">\
               <div class=\"modal-content\">\
                 <button class=\"modal-close\">&times;</button>\
                 <img src=\"{src}\" alt=\"{title}\" class=\"modal-image\">\
                 <div class=\"modal-info\">\
                   <h3>{title}</h3>\
                   <p>{desc}</p>\
                 </div>\
               </div>\
             </div>",
            src = escape_html(&self.image_src),
            title = title,
            desc = MODAL_DESCRIPTION,
        )
    }
}

/// Escape text for use inside element content or a double-quoted attribute.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Which close gesture the modal received.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseTrigger {
    Button,
    Backdrop,
    Escape,
}

/// Whether a click on the overlay should close the modal: only clicks that
/// land on the overlay itself, not bubbled clicks from its content.
#[inline]
pub fn backdrop_click_closes(target_is_overlay: bool) -> Option<CloseTrigger> {
    target_is_overlay.then_some(CloseTrigger::Backdrop)
}

#[inline]
pub fn key_closes(key: &str) -> Option<CloseTrigger> {
    (key == "Escape").then_some(CloseTrigger::Escape)
}

pub const MODAL_CSS: &str = r#"
.portfolio-modal {
  position: fixed;
  top: 0;
  left: 0;
  width: 100%;
  height: 100%;
  z-index: 1000;
  display: flex;
  align-items: center;
  justify-content: center;
}

.modal-overlay {
  background: rgba(0, 0, 0, 0.8);
  width: 100%;
  height: 100%;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 2rem;
}

.modal-content {
  background: white;
  border-radius: 12px;
  max-width: 90%;
  max-height: 90%;
  position: relative;
  overflow: hidden;
}

.modal-close {
  position: absolute;
  top: 1rem;
  right: 1rem;
  background: rgba(0, 0, 0, 0.7);
  color: white;
  border: none;
  width: 40px;
  height: 40px;
  border-radius: 50%;
  font-size: 1.5rem;
  cursor: pointer;
  z-index: 1001;
}

.modal-image {
  width: 100%;
  height: auto;
  display: block;
}

.modal-info {
  padding: 1.5rem;
}

.modal-info h3 {
  font-family: 'Poppins', sans-serif;
  color: #B88E2F;
  margin-bottom: 0.5rem;
}
"#;
