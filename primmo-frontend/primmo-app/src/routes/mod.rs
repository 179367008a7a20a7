pub mod not_found;
pub mod settings;

pub mod legal {
    pub mod privacy_policy;
}
