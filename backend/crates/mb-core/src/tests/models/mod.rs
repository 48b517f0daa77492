mod gate_decision;
mod link_record;
mod secrets;
