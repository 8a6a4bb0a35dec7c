//! Decides when a new frame is worth drawing.
//!
//! The engine bumps a revision counter on every visible change, so the loop
//! redraws immediately when the revision moves and otherwise only refreshes
//! occasionally (to pick up terminal resizes).

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    idle_refresh_ms: u64,
    last_render_ms: u64,
    last_revision: u64,
    has_rendered: bool,
}

impl RenderThrottle {
    pub fn new(idle_refresh_ms: u64) -> Self {
        Self {
            idle_refresh_ms,
            last_render_ms: 0,
            last_revision: 0,
            has_rendered: false,
        }
    }

    /// Render on the first call, whenever `revision` changed, and otherwise at
    /// most once per `idle_refresh_ms`.
    pub fn should_render(&mut self, now_ms: u64, revision: u64) -> bool {
        let due = !self.has_rendered
            || revision != self.last_revision
            || now_ms.saturating_sub(self.last_render_ms) >= self.idle_refresh_ms;

        if due {
            self.has_rendered = true;
            self.last_render_ms = now_ms;
            self.last_revision = revision;
        }
        due
    }

    /// Force the next call to render.
    pub fn invalidate(&mut self) {
        self.has_rendered = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_on_revision_change_and_idle_timeout() {
        let mut throttle = RenderThrottle::new(250);
        assert!(throttle.should_render(0, 0));
        assert!(!throttle.should_render(10, 0));
        assert!(throttle.should_render(20, 1));
        assert!(!throttle.should_render(200, 1));
        assert!(throttle.should_render(270, 1));
    }

    #[test]
    fn invalidate_forces_render() {
        let mut throttle = RenderThrottle::new(1000);
        assert!(throttle.should_render(0, 5));
        throttle.invalidate();
        assert!(throttle.should_render(1, 5));
    }
}
