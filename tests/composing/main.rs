mod components;
mod configured;
