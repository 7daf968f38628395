impl<'a, IN, CLK> KioskApp<'a, IN, CLK>
where
    IN: InputProvider,
    CLK: WallClock,
{
    fn dispatch(&mut self, action: &'a Action<'a>, now_ms: u64) {
        let transition = reducer::apply(&mut self.session, &self.graph, action);
        self.after_transition(transition, now_ms);
    }

    fn confirm_hold(&mut self, key: ControlKey, on_complete: &'a Action<'a>, now_ms: u64) {
        let transition = reducer::complete_hold(&mut self.session, &self.graph, key, on_complete);
        if !transition.moved() && self.session.flash_key().is_some() {
            self.flash_pulse = Some(AnimationSpec::new(
                AnimationKind::Pulse,
                now_ms,
                ANIM_FLASH_MS,
            ));
        }
        self.after_transition(transition, now_ms);
    }

    fn after_transition(&mut self, transition: Transition, now_ms: u64) {
        match transition {
            Transition::Moved { .. } => {
                self.flash_pulse = None;
                self.last_hold_slot = None;
                self.start_transition(AnimationKind::Fade, now_ms, ANIM_STEP_MS);
                self.pending_redraw = true;
            }
            Transition::Stayed => {
                self.pending_redraw = true;
            }
            Transition::UnknownTarget => {}
        }
    }

    fn raise_screensaver(&mut self, now_ms: u64) {
        if let Some(key) = self.session.hold_mut().cancel() {
            debug!("kiosk-idle: screensaver cancelled hold {:?}", key);
        }
        self.last_hold_slot = None;
        self.start_transition(AnimationKind::Fade, now_ms, ANIM_COVER_MS);
        self.pending_redraw = true;
    }

    fn dismiss_screensaver(&mut self, now_ms: u64) {
        let Some(policy) = self.idle.dismiss(now_ms) else {
            return;
        };

        match policy {
            DismissPolicy::ResetToHome => {
                self.session.reset(self.graph.start_index());
                self.flash_pulse = None;
                debug!("kiosk-idle: session reset to {}", self.graph.start().id);
            }
            DismissPolicy::Resume => {
                debug!("kiosk-idle: resuming at {}", self.current_step().id);
            }
        }

        self.start_transition(AnimationKind::Fade, now_ms, ANIM_STEP_MS);
        self.pending_redraw = true;
    }

    fn start_transition(&mut self, kind: AnimationKind, now_ms: u64, duration_ms: u16) {
        self.transition = Some(AnimationSpec::new(kind, now_ms, duration_ms));
    }

    fn transition_frame(&self, now_ms: u64) -> Option<AnimationFrame> {
        self.transition.and_then(|anim| anim.frame(now_ms))
    }

    fn flash_frame(&self, now_ms: u64) -> Option<AnimationFrame> {
        self.session.flash_key()?;
        self.flash_pulse.and_then(|anim| anim.frame(now_ms))
    }
}
