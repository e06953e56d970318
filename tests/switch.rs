mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use flamewick::InputLine;
    use flamewick::effect::EffectId;
    use flamewick::switch::{ModeChannel, ModeIntent, ModeSwitch};

    /// Input line stub whose level can be flipped from the test.
    #[derive(Clone)]
    struct Line(Rc<Cell<bool>>);

    impl Line {
        fn new(asserted: bool) -> Self {
            Self(Rc::new(Cell::new(asserted)))
        }

        fn set(&self, asserted: bool) {
            self.0.set(asserted);
        }
    }

    impl InputLine for Line {
        fn is_asserted(&mut self) -> bool {
            self.0.get()
        }
    }

    #[test]
    fn test_line_priority_selects_the_mode() {
        let channel = ModeChannel::<4>::new();
        let flame = Line::new(true);
        let ember = Line::new(true);
        let mut switch =
            ModeSwitch::new(flame.clone(), ember.clone(), channel.sender());

        // Line 1 wins over line 2.
        assert_eq!(switch.poll(), EffectId::Flame);

        flame.set(false);
        assert_eq!(switch.poll(), EffectId::Ember);

        ember.set(false);
        assert_eq!(switch.poll(), EffectId::Off);
    }

    #[test]
    fn test_intents_are_sent_only_on_edges() {
        let channel = ModeChannel::<4>::new();
        let receiver = channel.receiver();
        let flame = Line::new(false);
        let ember = Line::new(true);
        let mut switch =
            ModeSwitch::new(flame.clone(), ember.clone(), channel.sender());

        switch.poll();
        assert_eq!(
            receiver.try_receive(),
            Some(ModeIntent {
                mode: EffectId::Ember
            })
        );

        // A held position is quiet.
        switch.poll();
        switch.poll();
        assert_eq!(receiver.try_receive(), None);

        // Flipping the switch produces exactly one intent.
        ember.set(false);
        switch.poll();
        switch.poll();
        assert_eq!(
            receiver.try_receive(),
            Some(ModeIntent {
                mode: EffectId::Off
            })
        );
        assert_eq!(receiver.try_receive(), None);
    }

    #[test]
    fn test_full_channel_drops_then_retries() {
        let channel = ModeChannel::<1>::new();
        let receiver = channel.receiver();
        let flame = Line::new(true);
        let ember = Line::new(false);
        let mut switch =
            ModeSwitch::new(flame.clone(), ember.clone(), channel.sender());

        switch.poll();

        // Channel is full; the change to Off cannot be delivered yet.
        flame.set(false);
        switch.poll();

        assert_eq!(
            receiver.try_receive(),
            Some(ModeIntent {
                mode: EffectId::Flame
            })
        );

        // Next poll retries the undelivered edge.
        switch.poll();
        assert_eq!(
            receiver.try_receive(),
            Some(ModeIntent {
                mode: EffectId::Off
            })
        );
    }
}
