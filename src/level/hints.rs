use crate::level::model::{Method, Position};

/// Comment block suggesting a CSS recipe that solves `method` at `position`.
pub fn hint_comment(method: Method, position: Position) -> String {
    match method {
        Method::Flex => format!("/* Hint: on .stage use\n{} */", flex_recipe(position)),
        Method::Grid => format!("/* Hint: try\n{} */", grid_recipe(position)),
        Method::Absolute => format!(
            "/* Hint: position the crate absolutely\n{} */",
            absolute_recipe(position)
        ),
    }
}

fn flex_recipe(position: Position) -> &'static str {
    match position {
        Position::Center => "display: flex; justify-content: center; align-items: center;",
        Position::TopLeft => "display: flex; justify-content: flex-start; align-items: flex-start;",
        Position::TopRight => "display: flex; justify-content: flex-end; align-items: flex-start;",
        Position::BottomLeft => {
            "display: flex; justify-content: flex-start; align-items: flex-end;"
        }
        Position::BottomRight => "display: flex; justify-content: flex-end; align-items: flex-end;",
        Position::LeftCenter => "display: flex; justify-content: flex-start; align-items: center;",
        Position::RightCenter => "display: flex; justify-content: flex-end; align-items: center;",
        Position::TopCenter => "display: flex; justify-content: center; align-items: flex-start;",
        Position::BottomCenter => "display: flex; justify-content: center; align-items: flex-end;",
    }
}

fn grid_recipe(position: Position) -> &'static str {
    match position {
        Position::Center => "display: grid; place-items: center;",
        Position::TopLeft => "display: grid; place-items: start start;",
        Position::TopRight => "display: grid; place-items: start end;",
        Position::BottomLeft => "display: grid; place-items: end start;",
        Position::BottomRight => "display: grid; place-items: end end;",
        Position::LeftCenter => "display: grid; place-items: center start;",
        Position::RightCenter => "display: grid; place-items: center end;",
        Position::TopCenter => "display: grid; place-items: start center;",
        Position::BottomCenter => "display: grid; place-items: end center;",
    }
}

fn absolute_recipe(position: Position) -> &'static str {
    match position {
        Position::Center => {
            ".stage{position:relative;} .crate{position:absolute; top:50%; left:50%; transform:translate(-50%,-50%);}"
        }
        Position::TopLeft => ".stage{position:relative;} .crate{position:absolute; top:0; left:0;}",
        Position::TopRight => {
            ".stage{position:relative;} .crate{position:absolute; top:0; right:0;}"
        }
        Position::BottomLeft => {
            ".stage{position:relative;} .crate{position:absolute; bottom:0; left:0;}"
        }
        Position::BottomRight => {
            ".stage{position:relative;} .crate{position:absolute; bottom:0; right:0;}"
        }
        Position::LeftCenter => {
            ".stage{position:relative;} .crate{position:absolute; top:50%; left:0; transform:translateY(-50%);}"
        }
        Position::RightCenter => {
            ".stage{position:relative;} .crate{position:absolute; top:50%; right:0; transform:translateY(-50%);}"
        }
        Position::TopCenter => {
            ".stage{position:relative;} .crate{position:absolute; top:0; left:50%; transform:translateX(-50%);}"
        }
        Position::BottomCenter => {
            ".stage{position:relative;} .crate{position:absolute; bottom:0; left:50%; transform:translateX(-50%);}"
        }
    }
}
