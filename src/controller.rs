use crate::constants::{PORTFOLIO_ITEM_SELECTOR, REVEAL_SELECTOR};
use crate::core::MotionConfig;
use crate::dom;
use crate::hover::HoverEngine;
use crate::observer::VisibilityObserver;
use crate::parallax::ParallaxScheduler;
use web_sys as web;

/// Owns the scroll and hover effects for one page load.
///
/// `destroy` only disconnects the reveal observer; scroll and pointer
/// listeners stay registered for the rest of the page. Dropping the
/// controller additionally cancels the pending parallax frame and flushes
/// outstanding ripples.
pub struct AnimationController {
    reveal: Option<VisibilityObserver>,
    parallax: ParallaxScheduler,
    hover: HoverEngine,
}

impl AnimationController {
    pub fn init(
        window: &web::Window,
        document: &web::Document,
        config: &MotionConfig,
    ) -> anyhow::Result<Self> {
        let revealed = dom::query_all(document, REVEAL_SELECTOR);
        let reveal = VisibilityObserver::attach(window, revealed, config)?;

        let portfolio = dom::query_all(document, PORTFOLIO_ITEM_SELECTOR);
        if portfolio.is_empty() {
            log::warn!("[controller] no {} on page", PORTFOLIO_ITEM_SELECTOR);
        }
        let parallax = ParallaxScheduler::attach(window, portfolio.clone(), config);
        let hover = HoverEngine::attach(window, document, portfolio, config);

        Ok(Self {
            reveal,
            parallax,
            hover,
        })
    }

    pub fn destroy(&self) {
        if let Some(reveal) = &self.reveal {
            reveal.disconnect();
            log::info!(
                "[controller] observers disconnected ({} revealed, {} ripples pending)",
                reveal.revealed_count(),
                self.hover.pending_ripples()
            );
        }
    }
}

impl Drop for AnimationController {
    fn drop(&mut self) {
        self.destroy();
        self.parallax.cancel_pending();
        log::debug!("[controller] dropped");
    }
}
