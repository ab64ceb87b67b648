mod channel;
mod guild;
mod link;
mod message;
