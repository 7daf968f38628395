impl<'a, IN, CLK> KioskApp<'a, IN, CLK>
where
    IN: InputProvider,
    CLK: WallClock,
{
    /// `cover_raised` drops the batch: those gestures were aimed at the step
    /// the screensaver just covered.
    fn process_inputs(&mut self, now_ms: u64, cover_raised: bool) {
        loop {
            match self.input.poll_event() {
                Ok(Some(event)) if cover_raised => {
                    debug!("kiosk-input: {:?} arrived after the idle deadline", event);
                }
                Ok(Some(event)) => self.apply_input_event(event, now_ms),
                Ok(None) => break,
                Err(_) => {
                    warn!("kiosk-input: provider error, dropping the rest of this tick");
                    break;
                }
            }
        }
    }

    fn apply_input_event(&mut self, event: InputEvent, now_ms: u64) {
        if event.is_activity() {
            self.idle.observe_input(now_ms);
        }

        if self.idle.is_showing() {
            if matches!(event, InputEvent::Tap(_)) {
                self.dismiss_screensaver(now_ms);
            } else {
                debug!("kiosk-input: {:?} swallowed by screensaver", event);
            }
            return;
        }

        match event {
            InputEvent::Press(Target::Control(position)) => self.press_control(position, now_ms),
            InputEvent::Release(Target::Control(position))
            | InputEvent::Leave(Target::Control(position)) => self.release_control(position),
            InputEvent::Cancel => {
                if let Some(key) = self.session.hold_mut().cancel() {
                    debug!("kiosk-hold: platform cancel aborted {:?}", key);
                    self.pending_redraw = true;
                }
            }
            InputEvent::Tap(Target::Control(position)) => self.tap_control(position, now_ms),
            InputEvent::Tap(Target::ChoiceLeft) => self.tap_choice(false, now_ms),
            InputEvent::Tap(Target::ChoiceRight) => self.tap_choice(true, now_ms),
            InputEvent::Press(_)
            | InputEvent::Release(_)
            | InputEvent::Leave(_)
            | InputEvent::Tap(Target::Overlay)
            | InputEvent::Key => {}
        }
    }

    fn press_control(&mut self, position: u8, now_ms: u64) {
        let step_index = self.session.current();
        let step = self.graph.step(step_index);
        let Some(control) = step.control(position as usize) else {
            debug!(
                "kiosk-input: press on missing control step={} position={}",
                step.id, position
            );
            return;
        };
        // Taps fire on `Tap`; only holds start on press.
        let Some(duration_ms) = control.hold_duration_ms(self.config.default_hold_ms) else {
            return;
        };

        let key = ControlKey::new(step_index, position);
        if self.session.completed_holds().contains(key) {
            debug!(
                "kiosk-hold: step={} position={} already confirmed",
                step.id, position
            );
            return;
        }

        self.session
            .hold_mut()
            .start(key, duration_ms, &control.action, now_ms);
        self.last_hold_slot = None;
        self.pending_redraw = true;
        debug!(
            "kiosk-hold: start step={} position={} duration_ms={}",
            step.id, position, duration_ms
        );
    }

    fn release_control(&mut self, position: u8) {
        let key = ControlKey::new(self.session.current(), position);
        if self.session.hold_mut().release(key) {
            debug!(
                "kiosk-hold: released early step={} position={}",
                self.current_step().id,
                position
            );
            self.last_hold_slot = None;
            self.pending_redraw = true;
        }
    }

    fn tap_control(&mut self, position: u8, now_ms: u64) {
        let step_index = self.session.current();
        let step = self.graph.step(step_index);
        let Some(control) = step.control(position as usize) else {
            return;
        };
        if control.is_hold() {
            debug!(
                "kiosk-input: tap on hold control step={} position={} ignored",
                step.id, position
            );
            return;
        }
        if gate::is_locked(
            step_index,
            step,
            position as usize,
            self.session.completed_holds(),
        ) {
            debug!(
                "kiosk-input: locked control step={} position={} ignored",
                step.id, position
            );
            return;
        }

        self.session
            .clear_flash_if(ControlKey::new(step_index, position));
        self.dispatch(&control.action, now_ms);
    }

    fn tap_choice(&mut self, right_side: bool, now_ms: u64) {
        let step = self.current_step();
        let StepKind::Choice { left, right } = &step.kind else {
            debug!("kiosk-input: choice tap on linear step {}", step.id);
            return;
        };

        let side = if right_side { right } else { left };
        debug!("kiosk-nav: choice {:?} on {}", side.label, step.id);
        self.dispatch(&side.action, now_ms);
    }
}
