/// Keyboard state relevant to one simulation frame.
///
/// `pause` and `restart` are edges (true only on the frame the key went
/// down), the four directions are levels (true for as long as the key is
/// held).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Input {
    pub pause: bool,
    pub restart: bool,

    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Input {
    /// Same held keys, edges already consumed
    pub fn without_edges(self) -> Self {
        Self {
            pause: false,
            restart: false,
            ..self
        }
    }

    /// Combine with a later poll: held keys are taken from `next`,
    /// edges from either so none are lost between simulation frames
    pub fn latch(self, next: Self) -> Self {
        Self {
            pause: self.pause || next.pause,
            restart: self.restart || next.restart,
            ..next
        }
    }
}

#[test]
fn test_latch_keeps_edges() {
    let first = Input { pause: true, left: true, ..Input::default() };
    let second = Input { up: true, ..Input::default() };

    let latched = first.latch(second);
    assert!(latched.pause);
    assert!(!latched.left);
    assert!(latched.up);

    let consumed = latched.without_edges();
    assert!(!consumed.pause);
    assert!(consumed.up);
}
