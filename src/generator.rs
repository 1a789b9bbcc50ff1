use crate::config::{Config, OutputFormat};
use crate::gradient::gradient;
use crate::models::Rgb;
use crate::utils::output::{BANNER, INSTRUCTIONS, print_preview, render};
use log::info;

pub struct Generator {
    config: Config,
    colours: Vec<Rgb>,
}

impl Generator {
    pub fn new(config: Config) -> Self {
        let colours = gradient(config.start, config.end, config.steps);
        info!(
            "Generated {} step gradient from {} to {}",
            colours.len(),
            config.start,
            config.end
        );
        Self { config, colours }
    }

    pub fn colours(&self) -> &[Rgb] {
        &self.colours
    }

    /// Full text written to stdout, excluding the optional preview table.
    ///
    /// JSON is never wrapped in the banner so stdout stays parseable.
    pub fn render(&self) -> anyhow::Result<String> {
        let body = render(&self.colours, self.config.format)?;
        if self.config.quiet || self.config.format == OutputFormat::Json {
            return Ok(body);
        }
        Ok(format!("{}\n\n{}\n\n{}\n", BANNER, INSTRUCTIONS, body))
    }

    pub fn run(self) -> anyhow::Result<()> {
        let output = self.render()?;
        println!("{}", output);

        if self.config.preview {
            print_preview(&self.colours);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroUsize;

    fn config(steps: usize) -> Config {
        Config {
            start: Rgb::new(0xFF, 0, 0),
            end: Rgb::new(0, 0, 0xFF),
            steps: NonZeroUsize::new(steps).unwrap(),
            ..Config::default()
        }
    }

    #[test]
    fn test_render_with_banner() {
        let generator = Generator::new(config(3));
        assert_eq!(
            generator.render().unwrap(),
            "Gradient Code Generator\n\n\
             Copy and paste this code as the gradient animation value:\n\n\
             { 0xFF0000, 0x7F007F, 0x0000FF }\n"
        );
    }

    #[test]
    fn test_render_quiet() {
        let generator = Generator::new(Config {
            quiet: true,
            ..config(2)
        });
        assert_eq!(generator.render().unwrap(), "{ 0xFF0000, 0x0000FF }");
    }

    #[test]
    fn test_render_quiet_json() {
        let generator = Generator::new(Config {
            quiet: true,
            format: OutputFormat::Json,
            ..config(4)
        });
        let value: serde_json::Value = serde_json::from_str(&generator.render().unwrap()).unwrap();
        assert_eq!(value[0]["hex"], "0xFF0000");
        assert_eq!(value[3]["hex"], "0x0000FF");
    }

    #[test]
    fn test_json_skips_banner() {
        let generator = Generator::new(Config {
            format: OutputFormat::Json,
            ..config(3)
        });
        let output = generator.render().unwrap();
        assert!(!output.contains(BANNER));
        assert!(!output.contains(INSTRUCTIONS));

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(3));
        assert_eq!(value[1]["hex"], "0x7F007F");
    }

    #[test]
    fn test_default_config_runs_black_to_white() {
        let generator = Generator::new(Config::default());
        let colours = generator.colours();
        assert_eq!(colours.len(), 8);
        assert_eq!(colours[0], Rgb::new(0, 0, 0));
        assert_eq!(colours[7], Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_single_step_renders_start_only() {
        let generator = Generator::new(Config {
            quiet: true,
            ..config(1)
        });
        assert_eq!(generator.render().unwrap(), "{ 0xFF0000 }");
    }
}
