/// What the "enable audio" banner should currently look like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoticeView {
    #[default]
    Hidden,
    Visible,
    /// Fading out before it is hidden.
    Fading,
}

/// The dismissible banner shown when playback could not start on its own.
///
/// Each `show` bumps a generation number; timers carry the generation they
/// were started for so a timer from an earlier showing cannot hide a newer one.
#[derive(Debug, Clone, Default)]
pub struct AudioNotice {
    view: NoticeView,
    generation: u64,
}

impl AudioNotice {
    pub fn view(&self) -> NoticeView {
        self.view
    }

    /// Show the banner and return the generation its dismissal timer must present.
    pub fn show(&mut self) -> u64 {
        self.generation += 1;
        self.view = NoticeView::Visible;
        self.generation
    }

    /// The auto-dismiss delay elapsed. Returns true when a fade-out started.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.view != NoticeView::Visible {
            return false;
        }
        self.view = NoticeView::Fading;
        true
    }

    /// The fade finished. Returns true when the banner got hidden.
    pub fn finish_fade(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.view != NoticeView::Fading {
            return false;
        }
        self.view = NoticeView::Hidden;
        true
    }

    pub fn dismiss(&mut self) {
        self.view = NoticeView::Hidden;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_then_hides() {
        let mut notice = AudioNotice::default();
        let generation = notice.show();
        assert_eq!(notice.view(), NoticeView::Visible);
        assert!(notice.expire(generation));
        assert_eq!(notice.view(), NoticeView::Fading);
        assert!(notice.finish_fade(generation));
        assert_eq!(notice.view(), NoticeView::Hidden);
    }

    #[test]
    fn stale_timer_does_not_hide_a_newer_showing() {
        let mut notice = AudioNotice::default();
        let first = notice.show();
        let second = notice.show();
        assert!(!notice.expire(first));
        assert_eq!(notice.view(), NoticeView::Visible);
        assert!(notice.expire(second));
    }

    #[test]
    fn dismissed_notice_ignores_its_timer() {
        let mut notice = AudioNotice::default();
        let generation = notice.show();
        notice.dismiss();
        assert!(!notice.expire(generation));
        assert!(!notice.finish_fade(generation));
        assert_eq!(notice.view(), NoticeView::Hidden);
    }
}
