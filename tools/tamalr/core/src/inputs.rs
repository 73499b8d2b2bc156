/// The three buttons under the Tamagotchi's screen.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Button {
    Left,
    Middle,
    Right,
}

impl Button {
    pub const ALL: [Button; 3] = [Button::Left, Button::Right, Button::Middle];

    /// Joypad button the host reads for this device button.
    pub fn joypad(self) -> JoypadButton {
        match self {
            Button::Left => JoypadButton::Y,
            Button::Right => JoypadButton::A,
            Button::Middle => JoypadButton::B,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ButtonState {
    #[default]
    Released,
    Pressed,
}

impl From<bool> for ButtonState {
    fn from(pressed: bool) -> Self {
        if pressed {
            ButtonState::Pressed
        } else {
            ButtonState::Released
        }
    }
}

/// The RetroPad face buttons the device buttons are read from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum JoypadButton {
    A,
    B,
    Y,
}

#[derive(Copy, Clone, Debug)]
pub struct InputDescriptor {
    pub button: JoypadButton,
    pub description: &'static str,
}

pub const INPUT_DESCRIPTORS: [InputDescriptor; 3] = [
    InputDescriptor { button: JoypadButton::Y, description: "A (Select)" },
    InputDescriptor { button: JoypadButton::B, description: "B (Execute)" },
    InputDescriptor { button: JoypadButton::A, description: "C (Cancel)" },
];
